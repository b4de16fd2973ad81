//! Interactive descent through the mansion.
//!
//! The explorer keeps a cursor on the current room and loops: show the room,
//! stop at a dead end, otherwise offer the existing doors plus the exit and
//! read one line per menu round. Taking a door moves the cursor; nothing in
//! the map is ever modified.

use std::io::{BufRead, Write};

use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{DomainError, MansionMap, Room, Side};
use crate::output;

/// A menu choice typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Side),
    Exit,
}

impl Choice {
    /// Parses one input line: a single character, case-insensitive.
    /// `e` goes left, `d` goes right, `s` leaves. Anything else is rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match key.to_ascii_lowercase() {
            'e' => Some(Choice::Go(Side::Left)),
            'd' => Some(Choice::Go(Side::Right)),
            's' => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// How a traversal terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Reached a room without doors
    DeadEnd,
    /// Player chose to leave
    Exit,
    /// Input ran out while waiting for a choice
    InputClosed,
}

/// Outcome of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// Rooms visited, starting room first
    pub path: Vec<String>,
    pub ending: Ending,
}

impl Exploration {
    /// Number of doors taken.
    pub fn descents(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn route(&self) -> String {
        self.path.iter().join(" → ")
    }
}

/// Drives a single descent, reading choices from `input` and writing the
/// conversation to `out`.
pub struct Explorer<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Walks from `start` until a dead end, an exit choice or end of input.
    #[instrument(level = "debug", skip(self, map))]
    pub fn explore(&mut self, map: &MansionMap, start: Index) -> ApplicationResult<Exploration> {
        let mut cursor = start;
        let mut path = Vec::new();

        'rooms: loop {
            let room = map.room(cursor).ok_or(DomainError::UnknownRoom(cursor))?;
            path.push(room.name.clone());
            output::room(&mut self.out, &room.name).with_context("write room")?;

            if room.is_dead_end() {
                output::dead_end(&mut self.out).with_context("write dead end")?;
                info!(room = %room.name, "reached dead end");
                return Ok(Exploration {
                    path,
                    ending: Ending::DeadEnd,
                });
            }

            loop {
                self.show_menu(map, room)?;

                let Some(line) = self.read_line()? else {
                    debug!("input closed at {}", room.name);
                    output::leave(&mut self.out).with_context("write leave")?;
                    return Ok(Exploration {
                        path,
                        ending: Ending::InputClosed,
                    });
                };

                match Choice::parse(&line) {
                    Some(Choice::Go(side)) => match room.child(side) {
                        Some(next) => {
                            debug!("going {} from {}", side, room.name);
                            cursor = next;
                            continue 'rooms;
                        }
                        None => output::no_path(&mut self.out, side).with_context("write no path")?,
                    },
                    Some(Choice::Exit) => {
                        output::leave(&mut self.out).with_context("write leave")?;
                        info!(room = %room.name, "player left");
                        return Ok(Exploration {
                            path,
                            ending: Ending::Exit,
                        });
                    }
                    None => {
                        debug!("rejected input {:?}", line.trim());
                        output::invalid_option(&mut self.out).with_context("write invalid option")?
                    }
                }
            }
        }
    }

    fn show_menu(&mut self, map: &MansionMap, room: &Room) -> ApplicationResult<()> {
        output::menu_header(&mut self.out).with_context("write menu")?;
        for side in Side::ALL {
            if let Some(child) = room.child(side) {
                let destination = map.room(child).ok_or(DomainError::UnknownRoom(child))?;
                output::door(&mut self.out, side, &destination.name).with_context("write menu")?;
            }
        }
        output::exit_option(&mut self.out).with_context("write menu")?;
        output::prompt(&mut self.out, "Option:").with_context("write prompt")
    }

    // None once input is exhausted; bytes that are not UTF-8 are kept as
    // replacement characters so the line is rejected like any unknown key
    fn read_line(&mut self) -> ApplicationResult<Option<String>> {
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf).with_context("read choice")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }
}
