//! Expansion-aware flattening of the forest.
//!
//! A node is visible iff it is a root, or its parent is visible and
//! expanded. The listing is pre-order, depth-first, children in sibling
//! order: the order the render layer displays and the reorder
//! translation relies on for its index arithmetic. It is a pure function
//! of the forest and the expansion flags, recomputed from scratch on
//! demand; no incremental state is kept between calls.

use generational_arena::Index;

use crate::arena::{Forest, NodeId};
use crate::color::NodeColor;

/// One row of the flattened, visibility-aware listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    pub id: NodeId,
    pub title: String,
    pub color: Option<NodeColor>,
    /// Nesting level; roots are depth 0.
    pub depth: usize,
    /// Parent id, `None` for roots.
    pub parent: Option<NodeId>,
    pub has_children: bool,
    pub expanded: bool,
}

/// Lazy walk over the visible rows.
pub struct VisibleIter<'a> {
    forest: &'a Forest,
    stack: Vec<(Index, usize)>,
}

impl<'a> VisibleIter<'a> {
    fn new(forest: &'a Forest) -> Self {
        let stack = forest.roots.iter().rev().map(|&r| (r, 0)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for VisibleIter<'a> {
    type Item = VisibleNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, depth)) = self.stack.pop() {
            if let Some(node) = self.forest.node(current) {
                // Collapsed nodes stay visible; their subtrees do not.
                if node.expanded {
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, depth + 1));
                    }
                }
                let parent = node
                    .parent
                    .and_then(|p| self.forest.node(p))
                    .map(|p| p.id.clone());
                return Some(VisibleNode {
                    id: node.id.clone(),
                    title: node.title.clone(),
                    color: node.color,
                    depth,
                    parent,
                    has_children: node.has_children(),
                    expanded: node.expanded,
                });
            }
        }
        None
    }
}

impl Forest {
    /// Lazy iterator over the visible rows, in display order.
    pub fn visible_iter(&self) -> VisibleIter<'_> {
        VisibleIter::new(self)
    }

    /// Materialized visible listing, in display order.
    pub fn visible_nodes(&self) -> Vec<VisibleNode> {
        self.visible_iter().collect()
    }

    /// Position of a node within the visible listing, if it is visible.
    pub fn visible_index_of(&self, id: &NodeId) -> Option<usize> {
        self.visible_iter().position(|row| &row.id == id)
    }
}
