//! CLI layer: argument parsing, command dispatch and the exploration session

pub mod args;
pub mod commands;
pub mod error;

pub use args::{Cli, Commands};
pub use commands::{execute_command, run_session, SessionReport};
pub use error::{CliError, CliResult};
