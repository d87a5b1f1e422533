//! Service container for dependency injection
//!
//! Wires up the advisor with its dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::AdvisorService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding the application service and its configuration.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// The decision tree engine
    pub advisor: AdvisorService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let advisor = AdvisorService::new(Arc::clone(&fs))
            .with_default_file(settings.tree_file.clone());

        Self {
            settings,
            fs,
            advisor,
        }
    }

    /// Resolve a user-supplied file name; blank input means the configured tree file.
    pub fn tree_path(&self, input: &str) -> PathBuf {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.settings.tree_file.clone()
        } else {
            Path::new(trimmed).to_path_buf()
        }
    }
}
