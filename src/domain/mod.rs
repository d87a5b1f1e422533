//! Domain layer: decision tree model and its text form
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod codec;
pub mod entities;
pub mod error;
pub mod preset;

pub use codec::{Decoded, LoadWarning};
pub use entities::*;
pub use error::DomainError;

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Uses shellexpand crate; unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
