//! Console output for the exploration session, with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Every helper writes to the given writer so sessions can run against
//! in-memory buffers.

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::Side;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print the opening banner
pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== DETECTIVE QUEST - THE MYSTERIOUS MANSION ===".cyan().bold())?;
    writeln!(out, "Explore the mansion and find the right path!")?;
    writeln!(out, "--------------------------------------------")
}

/// Print the room the player is standing in
pub fn room(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "\nYou are in: {}", name.bold())
}

/// Print the dead-end notice
pub fn dead_end(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "This room has no exits. You have reached the end of the exploration!".yellow()
    )
}

/// Print the menu header
pub fn menu_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nChoose your path:")
}

/// Print one available door
pub fn door(out: &mut impl Write, side: Side, destination: &str) -> io::Result<()> {
    writeln!(out, "{} - Go {} ({})", side.key(), side, destination)
}

/// Print the exit option
pub fn exit_option(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "s - Leave the mansion")
}

/// Print prompt without newline (cyan)
pub fn prompt(out: &mut impl Write, msg: &str) -> io::Result<()> {
    write!(out, "{} ", msg.cyan())?;
    out.flush()
}

/// Print the notice for a missing door (red X)
pub fn no_path(out: &mut impl Write, side: Side) -> io::Result<()> {
    writeln!(out, "{} There is no path to the {}!", "✗".red(), side)
}

/// Print the notice for an unknown option (red X)
pub fn invalid_option(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} Invalid option! Try again.", "✗".red())
}

/// Print the notice for leaving early
pub fn leave(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nYou decided to leave the mansion.")
}

/// Print the route walked (green label)
pub fn route(out: &mut impl Write, rooms: &str) -> io::Result<()> {
    writeln!(out, "\n{}: {}", "Route".green(), rooms)
}

/// Print the closing farewell
pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nExploration over. See you next time, detective!")
}
