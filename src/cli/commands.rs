use std::io::{self, BufRead, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::application::{Exploration, Explorer};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::domain::{build_mansion, DomainError};
use crate::output;
use crate::tree_traits::TreeStringConvert;

/// What a finished session walked through and gave back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub exploration: Exploration,
    /// Room names in release order
    pub released: Vec<String>,
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => _explore(),
        Some(Commands::Map) => _map(),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument]
fn _explore() -> CliResult<()> {
    let stdin = io::stdin();
    let report = run_session(stdin.lock(), io::stdout().lock())?;
    debug!(
        "session ended {:?} after {} descents",
        report.exploration.ending,
        report.exploration.descents()
    );
    Ok(())
}

#[instrument]
fn _map() -> CliResult<()> {
    let tree = build_mansion().to_tree_string();
    let mut out = io::stdout().lock();
    write!(out, "{}", tree).map_err(|e| CliError::io("write map", e))
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// One full session: banner, build the map, explore from the entrance,
/// release every room, farewell.
#[instrument(level = "debug", skip_all)]
pub fn run_session<R: BufRead, W: Write>(input: R, mut out: W) -> CliResult<SessionReport> {
    output::banner(&mut out).map_err(|e| CliError::io("write banner", e))?;

    let map = build_mansion();
    let root = map
        .root()
        .ok_or(DomainError::EmptyMap)
        .map_err(|e| CliError::Application(e.into()))?;

    let exploration = Explorer::new(input, &mut out).explore(&map, root)?;

    let released: Vec<String> = map.release().into_iter().map(|room| room.name).collect();
    info!("released {} rooms", released.len());

    output::route(&mut out, &exploration.route()).map_err(|e| CliError::io("write route", e))?;
    output::farewell(&mut out).map_err(|e| CliError::io("write farewell", e))?;

    Ok(SessionReport {
        exploration,
        released,
    })
}
