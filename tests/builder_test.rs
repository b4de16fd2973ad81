//! Tests for the fixed mansion layout

use dquest::domain::{build_mansion, MansionMap, MANSION};

#[test]
fn given_fixed_layout_when_building_then_six_rooms_three_deep() {
    let map = build_mansion();

    assert_eq!(map.len(), 6);
    assert_eq!(map.depth(), 3);
    assert_eq!(map.dead_ends(), ["Library", "Garden", "Basement"]);

    let root = map.room(map.root().unwrap()).unwrap();
    assert_eq!(root.name, "Entrance Hall");
}

#[test]
fn given_two_builds_when_comparing_then_equal_shape_but_independent() {
    // Arrange
    let first = build_mansion();
    let second = MansionMap::from_blueprint(&MANSION);

    // Assert: same structure
    assert_eq!(first.outline(), second.outline());

    // Act: releasing one leaves the other untouched
    let released = first.release();

    assert_eq!(released.len(), 6);
    assert_eq!(second.len(), 6);
    assert_eq!(second.depth(), 3);
}

#[test]
fn given_kitchen_when_inspecting_then_only_right_door_exists() {
    let map = build_mansion();
    let (_, kitchen) = map
        .iter()
        .find(|(_, room)| room.name == "Kitchen")
        .expect("kitchen exists");

    assert!(kitchen.left.is_none());
    let basement = map.room(kitchen.right.unwrap()).unwrap();
    assert_eq!(basement.name, "Basement");
    assert!(basement.is_dead_end());
}
