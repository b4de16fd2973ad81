use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

/// Which of the two doors out of a room leads to a child room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Key the player types to take this side.
    pub fn key(self) -> char {
        match self {
            Side::Left => 'e',
            Side::Right => 'd',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A room in the mansion: a labelled node with up to two child rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Short label shown to the player
    pub name: String,
    /// Index of the room this one hangs off, None for the entrance
    pub parent: Option<Index>,
    /// Room behind the left door
    pub left: Option<Index>,
    /// Room behind the right door
    pub right: Option<Index>,
}

impl Room {
    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// A room with neither door is a dead end.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn child_slot(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Shape of one room as seen from outside the arena: its name and the names
/// behind its two doors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOutline {
    pub name: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Arena-backed binary tree of rooms.
///
/// Each room index appears in exactly one parent slot, so the map is a
/// single-owner tree. Rooms are only added while building and only removed
/// by [`MansionMap::release_subtree`].
#[derive(Debug)]
pub struct MansionMap {
    /// Arena storage for all rooms
    arena: Arena<Room>,
    /// Index of the entrance, None for an empty map
    root: Option<Index>,
}

impl Default for MansionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MansionMap {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a room. Without a parent it becomes the entrance; otherwise it
    /// fills the given door of the parent. Returns None, inserting nothing,
    /// when the entrance already exists, the parent is unknown or the door is
    /// already taken.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_room(&mut self, name: &str, parent: Option<(Index, Side)>) -> Option<Index> {
        match parent {
            None if self.root.is_some() => {
                debug!("entrance already set, {} rejected", name);
                return None;
            }
            Some((parent_idx, side)) => {
                let parent = self.room(parent_idx)?;
                if parent.child(side).is_some() {
                    debug!("{} door of {} already taken, {} rejected", side, parent.name, name);
                    return None;
                }
            }
            None => {}
        }

        let room_idx = self.arena.insert(Room {
            name: name.to_string(),
            parent: parent.map(|(idx, _)| idx),
            left: None,
            right: None,
        });

        match parent {
            Some((parent_idx, side)) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    *parent.child_slot(side) = Some(room_idx);
                }
            }
            None => self.root = Some(room_idx),
        }

        Some(room_idx)
    }

    pub fn room(&self, idx: Index) -> Option<&Room> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self, self.root)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, self.root)
    }

    /// Number of rooms on the longest path from the entrance, entrance included.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        match self.room(idx) {
            Some(room) => {
                1 + Side::ALL
                    .iter()
                    .filter_map(|&side| room.child(side))
                    .map(|child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Names of all dead-end rooms, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn dead_ends(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, room)| room.is_dead_end())
            .map(|(_, room)| room.name.clone())
            .collect()
    }

    /// Pre-order outline of the map, suitable for structural comparison of
    /// two independently built maps.
    pub fn outline(&self) -> Vec<RoomOutline> {
        let name_of = |idx: Option<Index>| idx.and_then(|i| self.room(i)).map(|r| r.name.clone());
        self.iter()
            .map(|(_, room)| RoomOutline {
                name: room.name.clone(),
                left: name_of(room.left),
                right: name_of(room.right),
            })
            .collect()
    }

    /// Releases the subtree rooted at `start`: left subtree, then right
    /// subtree, then the room itself. Returns the rooms in release order.
    /// `None` releases nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn release_subtree(&mut self, start: Option<Index>) -> Vec<Room> {
        let order: Vec<Index> = PostOrderIterator::new(self, start)
            .map(|(idx, _)| idx)
            .collect();

        let mut released = Vec::with_capacity(order.len());
        for idx in order {
            if let Some(room) = self.arena.remove(idx) {
                debug!("released {}", room.name);
                released.push(room);
            }
        }

        if let Some(start_idx) = start {
            if self.root == Some(start_idx) {
                self.root = None;
            } else {
                self.detach(start_idx);
            }
        }
        released
    }

    /// Releases every room, consuming the map.
    pub fn release(mut self) -> Vec<Room> {
        let root = self.root;
        self.release_subtree(root)
    }

    // clears whichever parent door still points at an already removed room
    fn detach(&mut self, idx: Index) {
        for (_, room) in self.arena.iter_mut() {
            for side in Side::ALL {
                let slot = room.child_slot(side);
                if *slot == Some(idx) {
                    *slot = None;
                }
            }
        }
    }
}

/// Pre-order walk, left door before right door.
pub struct TreeIterator<'a> {
    map: &'a MansionMap,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(map: &'a MansionMap, start: Option<Index>) -> Self {
        Self {
            map,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(room) = self.map.room(current_idx) {
                // Push right first so left pops first
                self.stack.extend(room.right);
                self.stack.extend(room.left);
                return Some((current_idx, room));
            }
        }
        None
    }
}

/// Post-order walk: left subtree, right subtree, then the room.
pub struct PostOrderIterator<'a> {
    map: &'a MansionMap,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(map: &'a MansionMap, start: Option<Index>) -> Self {
        Self {
            map,
            stack: start.map(|idx| (idx, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(room) = self.map.room(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    if let Some(right) = room.right {
                        self.stack.push((right, false));
                    }
                    if let Some(left) = room.left {
                        self.stack.push((left, false));
                    }
                } else {
                    return Some((current_idx, room));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing;
    use rstest::{fixture, rstest};

    #[fixture]
    fn small_map() -> (MansionMap, Index) {
        testing::init_test_setup();
        let mut map = MansionMap::new();
        let hall = map.insert_room("Hall", None).unwrap();
        let west = map.insert_room("West Wing", Some((hall, Side::Left))).unwrap();
        map.insert_room("Attic", Some((west, Side::Right))).unwrap();
        map.insert_room("East Wing", Some((hall, Side::Right))).unwrap();
        (map, west)
    }

    #[test]
    fn given_empty_map_when_querying_then_reports_nothing() {
        let map = MansionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.depth(), 0);
        assert!(map.root().is_none());
        assert_eq!(map.iter().count(), 0);
        assert!(map.dead_ends().is_empty());
    }

    #[rstest]
    fn given_map_when_walking_preorder_then_left_comes_first(small_map: (MansionMap, Index)) {
        let (map, _) = small_map;
        let names: Vec<_> = map.iter().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, ["Hall", "West Wing", "Attic", "East Wing"]);
    }

    #[rstest]
    fn given_map_when_walking_postorder_then_children_precede_parent(
        small_map: (MansionMap, Index),
    ) {
        let (map, _) = small_map;
        let names: Vec<_> = map.iter_postorder().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, ["Attic", "West Wing", "East Wing", "Hall"]);
    }

    #[rstest]
    fn given_map_when_measuring_then_depth_and_dead_ends_match(small_map: (MansionMap, Index)) {
        let (map, _) = small_map;
        assert_eq!(map.depth(), 3);
        assert_eq!(map.dead_ends(), ["Attic", "East Wing"]);
    }

    #[rstest]
    fn given_occupied_door_when_inserting_then_rejected_and_nothing_added(
        small_map: (MansionMap, Index),
    ) {
        let (mut map, _) = small_map;
        let hall = map.root().unwrap();

        assert!(map.insert_room("Intruder", Some((hall, Side::Left))).is_none());

        assert_eq!(map.len(), 4);
        let left = map.room(hall).unwrap().left.unwrap();
        assert_eq!(map.room(left).unwrap().name, "West Wing");
        assert_eq!(map.release().len(), 4);
    }

    #[rstest]
    fn given_existing_entrance_when_inserting_root_then_rejected(small_map: (MansionMap, Index)) {
        let (mut map, _) = small_map;
        let hall = map.root();

        assert!(map.insert_room("Second Hall", None).is_none());

        assert_eq!(map.root(), hall);
        assert_eq!(map.len(), 4);
    }

    #[rstest]
    fn given_released_parent_when_inserting_then_rejected(small_map: (MansionMap, Index)) {
        let (mut map, west) = small_map;
        map.release_subtree(Some(west));

        assert!(map.insert_room("Orphan", Some((west, Side::Left))).is_none());
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn given_none_when_releasing_subtree_then_nothing_is_released(
        small_map: (MansionMap, Index),
    ) {
        let (mut map, _) = small_map;
        let released = map.release_subtree(None);
        assert!(released.is_empty());
        assert_eq!(map.len(), 4);
    }

    #[rstest]
    fn given_inner_room_when_releasing_subtree_then_parent_door_is_cleared(
        small_map: (MansionMap, Index),
    ) {
        let (mut map, west) = small_map;
        let released: Vec<_> = map
            .release_subtree(Some(west))
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(released, ["Attic", "West Wing"]);
        assert_eq!(map.len(), 2);
        let hall = map.root().unwrap();
        assert!(map.room(hall).unwrap().left.is_none());
        assert!(map.room(west).is_none());
    }

    #[rstest]
    fn given_map_when_releasing_then_every_room_goes_once(small_map: (MansionMap, Index)) {
        let (map, _) = small_map;
        let released = map.release();
        assert_eq!(released.len(), 4);
        assert_eq!(released.last().unwrap().name, "Hall");
    }
}
