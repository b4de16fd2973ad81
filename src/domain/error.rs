//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the map's structure.
/// These are independent of console and input concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("room not found in map: {0:?}")]
    UnknownRoom(Index),

    #[error("map has no entrance")]
    EmptyMap,
}
