//! Tests for releasing the mansion map

use std::collections::HashSet;

use dquest::domain::build_mansion;

#[test]
fn given_built_map_when_releasing_then_every_room_released_once_in_postorder() {
    // Arrange
    let map = build_mansion();

    // Act
    let released: Vec<String> = map.release().into_iter().map(|r| r.name).collect();

    // Assert
    assert_eq!(
        released,
        [
            "Library",
            "Garden",
            "Living Room",
            "Basement",
            "Kitchen",
            "Entrance Hall"
        ]
    );
    let unique: HashSet<_> = released.iter().collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn given_absent_room_when_releasing_then_noop() {
    let mut map = build_mansion();

    let released = map.release_subtree(None);

    assert!(released.is_empty());
    assert_eq!(map.len(), 6);
}

#[test]
fn given_kitchen_when_releasing_subtree_then_rest_of_map_survives() {
    let mut map = build_mansion();
    let root = map.root().unwrap();
    let kitchen = map.room(root).unwrap().right;

    let released: Vec<String> = map
        .release_subtree(kitchen)
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(released, ["Basement", "Kitchen"]);
    assert_eq!(map.len(), 4);
    assert!(map.room(root).unwrap().right.is_none());
    assert_eq!(map.dead_ends(), ["Library", "Garden"]);
}

#[test]
fn given_root_when_releasing_subtree_then_map_is_empty() {
    let mut map = build_mansion();
    let root = map.root();

    let released = map.release_subtree(root);

    assert_eq!(released.len(), 6);
    assert!(map.is_empty());
    assert!(map.root().is_none());
    assert_eq!(map.depth(), 0);
}
