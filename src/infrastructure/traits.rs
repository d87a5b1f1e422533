//! I/O boundary traits for testability
//!
//! These traits abstract file access and the interactive console, allowing
//! the advisor to be driven by scripted responses in tests.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::Answer;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents in one step.
    ///
    /// On failure the previous contents (if any) are left untouched.
    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Line-based interactive protocol between the advisor and its user.
pub trait Prompter {
    /// Show `message` and read one line of free text (newline stripped).
    fn prompt_line(&mut self, message: &str) -> io::Result<String>;

    /// One-way informational output.
    fn emit(&mut self, message: &str);

    fn emit_warning(&mut self, message: &str) {
        self.emit(&format!("Warning: {message}"));
    }

    fn emit_error(&mut self, message: &str) {
        self.emit(&format!("Error: {message}"));
    }

    /// Ask `question` until the response is exactly `y` or `n`.
    fn prompt_yes_no(&mut self, question: &str) -> io::Result<Answer> {
        let mut response = self.prompt_line(&format!("{question} (y/n)"))?;
        loop {
            if let Some(answer) = Answer::parse(&response) {
                return Ok(answer);
            }
            response = self.prompt_line("Please enter 'y' or 'n':")?;
        }
    }

    /// Ask until the trimmed response is not empty.
    fn prompt_non_empty(&mut self, message: &str) -> io::Result<String> {
        let mut response = self.prompt_line(message)?;
        while response.trim().is_empty() {
            response = self.prompt_line(message)?;
        }
        Ok(response.trim().to_string())
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
