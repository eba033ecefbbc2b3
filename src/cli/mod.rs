//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RenderArgs};
pub use commands::{handle_config_action, run_convert, run_interactive, ConvertRequest};
pub use enums::CharacterSet;
