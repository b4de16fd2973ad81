//! Rendering of the mansion map as a `termtree` tree.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::{MansionMap, Side};

pub trait TreeStringConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeStringConvert for MansionMap {
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("Empty map".to_string());
        };
        let Some(root) = self.room(root_idx) else {
            return Tree::new("Empty map".to_string());
        };

        fn build_tree(map: &MansionMap, room_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(room) = map.room(room_idx) {
                for side in Side::ALL {
                    if let Some(child_idx) = room.child(side) {
                        if let Some(child) = map.room(child_idx) {
                            let mut child_tree = Tree::new(format!("{}: {}", side, child.name));
                            build_tree(map, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }
        }

        let mut tree = Tree::new(root.name.clone());
        build_tree(self, root_idx, &mut tree);
        tree
    }
}
