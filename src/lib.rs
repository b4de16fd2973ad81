//! Detective Quest: a fixed mansion map laid out as a binary tree, explored
//! one door at a time from the entrance hall down to a dead end.
//!
//! Layers, innermost first:
//! - [`domain`]: rooms, the arena-backed map, the fixed layout, release
//! - [`application`]: the interactive explorer
//! - [`cli`]: argument parsing, commands, the full session

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod output;
pub mod tree_traits;
pub mod util;
