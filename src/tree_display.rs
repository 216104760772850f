//! Structure rendering via termtree.
//!
//! Builds the full containment structure (visibility flags ignored), one
//! `termtree::Tree` per root. Labels carry the title and the id so rows
//! printed here can be addressed in follow-up commands.

use generational_arena::Index;
use termtree::Tree;

use crate::arena::Forest;

pub trait TreeDisplayConvert {
    fn to_display_trees(&self) -> Vec<Tree<String>>;
}

impl TreeDisplayConvert for Forest {
    fn to_display_trees(&self) -> Vec<Tree<String>> {
        fn label(forest: &Forest, idx: Index) -> String {
            match forest.node(idx) {
                Some(node) => format!("{} [{}]", node.title, node.id),
                None => String::new(),
            }
        }

        fn build(forest: &Forest, idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = forest.node(idx) {
                for &child_idx in &node.children {
                    let mut child_tree = Tree::new(label(forest, child_idx));
                    build(forest, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        self.roots
            .iter()
            .map(|&root| {
                let mut tree = Tree::new(label(self, root));
                build(self, root, &mut tree);
                tree
            })
            .collect()
    }
}
