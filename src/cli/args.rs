//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Detective Quest: walk the rooms of a mansion, left or right, until a dead end
#[derive(Parser, Debug)]
#[command(name = "dquest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr (repeat for more: -d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explore the mansion interactively (default)
    Explore,

    /// Show the mansion map as a tree
    Map,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
