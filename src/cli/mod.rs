//! CLI layer.
//!
//! Argument parsing with clap and the single reversal command.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::{Cli, usage_error};
