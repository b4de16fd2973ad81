//! Fixed mansion layout and the builder that materialises it.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{MansionMap, Side};

/// Declarative description of a room and the rooms behind its doors.
#[derive(Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub name: &'static str,
    pub left: Option<&'static Blueprint>,
    pub right: Option<&'static Blueprint>,
}

impl Blueprint {
    pub const fn room(
        name: &'static str,
        left: Option<&'static Blueprint>,
        right: Option<&'static Blueprint>,
    ) -> Self {
        Self { name, left, right }
    }

    pub const fn dead_end(name: &'static str) -> Self {
        Self::room(name, None, None)
    }

    fn door(&self, side: Side) -> Option<&'static Blueprint> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

static LIBRARY: Blueprint = Blueprint::dead_end("Library");
static GARDEN: Blueprint = Blueprint::dead_end("Garden");
static BASEMENT: Blueprint = Blueprint::dead_end("Basement");
static LIVING_ROOM: Blueprint = Blueprint::room("Living Room", Some(&LIBRARY), Some(&GARDEN));
static KITCHEN: Blueprint = Blueprint::room("Kitchen", None, Some(&BASEMENT));

/// The mansion:
///
/// ```text
/// Entrance Hall
///  ├─ left:  Living Room
///  │    ├─ left:  Library
///  │    └─ right: Garden
///  └─ right: Kitchen
///       └─ right: Basement
/// ```
pub static MANSION: Blueprint =
    Blueprint::room("Entrance Hall", Some(&LIVING_ROOM), Some(&KITCHEN));

impl MansionMap {
    /// Builds a fresh map from a blueprint. Each call yields an independent
    /// arena; the blueprint itself is never touched.
    #[instrument(level = "debug", skip(blueprint), fields(root = blueprint.name))]
    pub fn from_blueprint(blueprint: &Blueprint) -> Self {
        let mut map = MansionMap::new();
        let mut stack: Vec<(&Blueprint, Option<(Index, Side)>)> = vec![(blueprint, None)];

        while let Some((current, parent)) = stack.pop() {
            let Some(idx) = map.insert_room(current.name, parent) else {
                continue;
            };
            // Right pushed first so rooms are inserted in pre-order
            for side in Side::ALL.into_iter().rev() {
                if let Some(child) = current.door(side) {
                    stack.push((child, Some((idx, side))));
                }
            }
        }

        debug!("built map with {} rooms", map.len());
        map
    }
}

/// Builds the fixed mansion map.
pub fn build_mansion() -> MansionMap {
    MansionMap::from_blueprint(&MANSION)
}
