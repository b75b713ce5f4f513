//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod check;
pub mod templates;

pub use check::{handle_check_command, handle_schema_command, OutputFormat, PASS_BANNER};
pub use templates::{handle_init_command, handle_templates_command};
