//! tripwise: a travel destination expert system
//!
//! A binary yes/no decision tree recommends a destination, learns new ones
//! when the user disagrees, and persists itself as pre-order `Q:`/`A:` text.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
