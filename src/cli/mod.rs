//! CLI layer: argument parsing, command dispatch, interactive menu

pub mod args;
pub mod commands;
pub mod error;
pub mod menu;
pub mod output;

pub use error::{CliError, CliResult};
