//! Infrastructure layer: I/O implementations and DI container
//!
//! Holds the filesystem and prompter boundaries and wires up the advisor.

pub mod di;
pub mod error;
pub mod traits;

pub use error::InfraError;
