//! CLI layer: argument parsing, command dispatch, the console prompter and
//! the interactive menu

pub mod args;
pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod output;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
