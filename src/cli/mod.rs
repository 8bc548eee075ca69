//! CLI command handling module
//!
//! Handles the config subcommands, logging setup and the plain text output
//! of the one-shot table commands.

mod config;
mod logging;
mod print;
mod version;

pub use config::{ConfigSubcommand, handle_config_command};
pub use logging::*;
pub use print::{format_table, print_table};
pub use version::display_version;
