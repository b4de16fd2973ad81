//! Domain layer: rooms, the mansion map and its fixed layout
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub mod builder;
pub mod error;

pub use arena::{MansionMap, PostOrderIterator, Room, RoomOutline, Side, TreeIterator};
pub use builder::{build_mansion, Blueprint, MANSION};
pub use error::DomainError;
