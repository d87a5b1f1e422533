//! Terminal implementation of the prompter

use std::io::{self, BufRead};

use crate::cli::output;
use crate::infrastructure::traits::Prompter;

/// Reads answers from stdin and writes colored output to the terminal.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        output::prompt(message);
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn emit(&mut self, message: &str) {
        output::info(message);
    }

    fn emit_warning(&mut self, message: &str) {
        output::warning(message);
    }

    fn emit_error(&mut self, message: &str) {
        output::error(message);
    }
}
