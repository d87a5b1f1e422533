//! Errors raised at the terminal and filesystem boundary

use thiserror::Error;

use crate::application::ApplicationError;

/// Advisor failures plus I/O that happens outside the advisor (writing the
/// tree view, reading a menu choice).
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Wrap a console or stdout failure; `context` names what was being done.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
