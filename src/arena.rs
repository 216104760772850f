use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::color::NodeColor;

/// Opaque, stable node identifier.
///
/// Ids are arbitrary string tokens. [`NodeId::fresh`] mints a new globally
/// unique token (UUID v4); seed documents and callers may also supply
/// their own. An id is never reused, and no two nodes in a forest share
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Mint a fresh unique id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for NodeId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// A labeled node in the forest.
///
/// The arena wiring (`parent`, `children`) is crate-private: reads go
/// through [`Forest`] queries, writes only through the editing operations.
#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub color: Option<NodeColor>,
    /// Whether this node's children are included in the visible listing.
    pub expanded: bool,
    pub(crate) parent: Option<Index>,
    pub(crate) children: Vec<Index>,
}

impl Node {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Structural coordinate of a node: its parent (`None` = root level) and
/// its position within that sibling sequence. Independent of visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub parent: Option<NodeId>,
    pub index: usize,
}

/// Arena-based multi-root forest of labeled nodes.
///
/// Uses a generational arena for memory-safe node references plus an
/// id map for O(1) lookup by [`NodeId`]. Sibling order is semantic: the
/// `roots` sequence and every `children` sequence are ordered.
///
/// This module is the read surface; all mutation lives in the editing
/// operations (`editor` module) so that every observable forest is
/// well-formed.
#[derive(Debug, Default)]
pub struct Forest {
    pub(crate) arena: Arena<Node>,
    pub(crate) ids: HashMap<NodeId, Index>,
    pub(crate) roots: Vec<Index>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes, at any depth.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains_key(id)
    }

    /// Look up a node's arena index by id. Absence is a normal outcome,
    /// not an error.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, id: &NodeId) -> Option<Index> {
        self.ids.get(id).copied()
    }

    pub fn node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    pub(crate) fn node_mut(&mut self, idx: Index) -> Option<&mut Node> {
        self.arena.get_mut(idx)
    }

    /// Look up a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.find(id).and_then(|idx| self.node(idx))
    }

    /// Ordered ids of the root-level nodes.
    pub fn root_ids(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .filter_map(|&idx| self.node(idx))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Ordered ids of a node's children. `None` if the id is absent.
    pub fn children_ids(&self, id: &NodeId) -> Option<Vec<NodeId>> {
        let node = self.get(id)?;
        Some(
            node.children
                .iter()
                .filter_map(|&idx| self.node(idx))
                .map(|child| child.id.clone())
                .collect(),
        )
    }

    /// Structural coordinate of a node: parent id (or root level) and
    /// position within that sibling sequence.
    #[instrument(level = "trace", skip(self))]
    pub fn locate(&self, id: &NodeId) -> Option<Location> {
        let idx = self.find(id)?;
        let node = self.node(idx)?;
        match node.parent {
            Some(parent_idx) => {
                let parent = self.node(parent_idx)?;
                let index = parent.children.iter().position(|&c| c == idx)?;
                Some(Location {
                    parent: Some(parent.id.clone()),
                    index,
                })
            }
            None => {
                let index = self.roots.iter().position(|&r| r == idx)?;
                Some(Location {
                    parent: None,
                    index,
                })
            }
        }
    }

    /// Pre-order depth-first iteration over the whole forest, children in
    /// sibling order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> ForestIter<'_> {
        ForestIter::new(self)
    }

    /// Post-order iteration: children before their parent.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Maximum depth over all trees (empty forest = 0, flat roots = 1).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        if let Some(node) = self.node(idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Ids of a node and all its descendants, in pre-order. Empty if the
    /// id is absent.
    pub fn subtree_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut collected = Vec::new();
        let Some(start) = self.find(id) else {
            return collected;
        };
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.node(current) {
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
                collected.push(node.id.clone());
            }
        }
        collected
    }

    /// True when `idx` lies inside the subtree rooted at `root`,
    /// including `root` itself. Walks the parent chain, O(depth).
    pub(crate) fn is_within(&self, idx: Index, root: Index) -> bool {
        let mut current = Some(idx);
        while let Some(c) = current {
            if c == root {
                return true;
            }
            current = self.node(c).and_then(|n| n.parent);
        }
        false
    }

    /// The sibling sequence owned by `parent` (root sequence for `None`).
    ///
    /// `parent` must be a live index.
    pub(crate) fn sibling_seq_mut(&mut self, parent: Option<Index>) -> &mut Vec<Index> {
        match parent {
            Some(idx) => &mut self.arena[idx].children,
            None => &mut self.roots,
        }
    }
}

pub struct ForestIter<'a> {
    forest: &'a Forest,
    stack: Vec<Index>,
}

impl<'a> ForestIter<'a> {
    fn new(forest: &'a Forest) -> Self {
        // Roots pushed in reverse for left-to-right traversal
        let stack = forest.roots.iter().rev().copied().collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for ForestIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.forest.node(current) {
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current, node));
            }
        }
        None
    }
}

pub struct PostOrderIter<'a> {
    forest: &'a Forest,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(forest: &'a Forest) -> Self {
        let stack = forest.roots.iter().rev().map(|&r| (r, false)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.forest.node(current) {
                if !visited {
                    self.stack.push((current, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::NewNode;

    // r1
    // ├── a
    // │   └── g
    // └── b
    // r2
    fn sample() -> Forest {
        let mut forest = Forest::new();
        let r1 = forest
            .insert(None, 0, NewNode::titled("r1").with_id("r1".into()))
            .unwrap();
        let a = forest
            .insert(Some(&r1), 0, NewNode::titled("a").with_id("a".into()))
            .unwrap();
        forest
            .insert(Some(&r1), 1, NewNode::titled("b").with_id("b".into()))
            .unwrap();
        forest
            .insert(Some(&a), 0, NewNode::titled("g").with_id("g".into()))
            .unwrap();
        forest
            .insert(None, 1, NewNode::titled("r2").with_id("r2".into()))
            .unwrap();
        forest
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let first = NodeId::fresh();
        let second = NodeId::fresh();
        assert_ne!(first, second);
    }

    #[test]
    fn test_locate_returns_parent_and_sibling_index() {
        let forest = sample();
        let loc = forest.locate(&"b".into()).unwrap();
        assert_eq!(loc.parent, Some("r1".into()));
        assert_eq!(loc.index, 1);

        let loc = forest.locate(&"r2".into()).unwrap();
        assert_eq!(loc.parent, None);
        assert_eq!(loc.index, 1);
    }

    #[test]
    fn test_preorder_iteration_is_depth_first_in_sibling_order() {
        let forest = sample();
        let order: Vec<String> = forest.iter().map(|(_, n)| n.id.to_string()).collect();
        assert_eq!(order, vec!["r1", "a", "g", "b", "r2"]);
    }

    #[test]
    fn test_postorder_iteration_visits_children_first() {
        let forest = sample();
        let order: Vec<String> = forest
            .iter_postorder()
            .map(|(_, n)| n.id.to_string())
            .collect();
        assert_eq!(order, vec!["g", "a", "b", "r1", "r2"]);
    }

    #[test]
    fn test_subtree_ids_covers_node_and_descendants() {
        let forest = sample();
        let ids: Vec<String> = forest
            .subtree_ids(&"r1".into())
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["r1", "a", "g", "b"]);
    }

    #[test]
    fn test_depth_counts_levels() {
        let forest = sample();
        assert_eq!(forest.depth(), 3);
        assert_eq!(Forest::new().depth(), 0);
    }
}
