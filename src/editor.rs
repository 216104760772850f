//! Structural editing of the forest.
//!
//! The operations here are the only write surface. Each one validates
//! fully before touching anything, so a failed call leaves the forest
//! exactly as it was (no partial mutation is ever observable), and a
//! successful call is a single transition between well-formed forests:
//! ids stay unique, every non-root keeps exactly one parent, containment
//! stays acyclic, and sibling order is preserved except where the
//! operation explicitly reorders.

use tracing::instrument;

use crate::arena::{Forest, Node, NodeId};
use crate::color::NodeColor;
use crate::errors::{EditError, EditResult};

/// Payload for [`Forest::insert`]: the attributes of a brand-new node.
///
/// Without an explicit id a fresh one is minted. New nodes start expanded
/// and childless.
#[derive(Debug, Clone)]
pub struct NewNode {
    pub id: Option<NodeId>,
    pub title: String,
    pub color: Option<NodeColor>,
    pub expanded: bool,
}

impl NewNode {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            color: None,
            expanded: true,
        }
    }

    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_color(mut self, color: NodeColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.expanded = false;
        self
    }
}

impl Forest {
    /// Insert a brand-new childless node at `index` within `parent`'s
    /// children (the root sequence when `parent` is `None`).
    ///
    /// An out-of-range `index` clamps to append. Fails with `NotFound`
    /// if the parent is absent and with `DuplicateId` if the payload
    /// carries an id already present in the forest. Returns the id of
    /// the inserted node.
    #[instrument(level = "debug", skip(self, node))]
    pub fn insert(
        &mut self,
        parent: Option<&NodeId>,
        index: usize,
        node: NewNode,
    ) -> EditResult<NodeId> {
        let parent_idx = match parent {
            Some(pid) => Some(
                self.find(pid)
                    .ok_or_else(|| EditError::NotFound(pid.clone()))?,
            ),
            None => None,
        };
        let id = node.id.unwrap_or_else(NodeId::fresh);
        if self.contains(&id) {
            return Err(EditError::DuplicateId(id));
        }

        let idx = self.arena.insert(Node {
            id: id.clone(),
            title: node.title,
            color: node.color,
            expanded: node.expanded,
            parent: parent_idx,
            children: Vec::new(),
        });
        self.ids.insert(id.clone(), idx);

        let seq = self.sibling_seq_mut(parent_idx);
        let at = index.min(seq.len());
        seq.insert(at, idx);
        Ok(id)
    }

    /// Move the node `source`, together with its entire subtree
    /// unmodified, so it becomes a child of `dest_parent` (root level
    /// when `None`) at `dest_index`.
    ///
    /// `dest_index` is interpreted against the destination sequence as
    /// the caller saw it before the move. When source and destination
    /// share a sequence, the index is corrected for the removal shift so
    /// the node lands next to the same neighbors the caller targeted.
    /// Out-of-range indices clamp to append.
    ///
    /// Fails with `NotFound` if either id is absent and with `Cycle` if
    /// the destination parent is the source or one of its descendants.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(
        &mut self,
        source: &NodeId,
        dest_parent: Option<&NodeId>,
        dest_index: usize,
    ) -> EditResult<()> {
        let src_idx = self
            .find(source)
            .ok_or_else(|| EditError::NotFound(source.clone()))?;
        let dest_parent_idx = match dest_parent {
            Some(pid) => Some(
                self.find(pid)
                    .ok_or_else(|| EditError::NotFound(pid.clone()))?,
            ),
            None => None,
        };
        if let (Some(dpi), Some(pid)) = (dest_parent_idx, dest_parent) {
            if self.is_within(dpi, src_idx) {
                return Err(EditError::Cycle {
                    src: source.clone(),
                    dest: pid.clone(),
                });
            }
        }

        // Validation done; detach, then splice.
        let old_parent_idx = self.node(src_idx).and_then(|n| n.parent);
        let old_seq = self.sibling_seq_mut(old_parent_idx);
        let old_pos = old_seq
            .iter()
            .position(|&c| c == src_idx)
            .ok_or_else(|| EditError::Internal(format!("{source} missing from its sibling sequence")))?;
        old_seq.remove(old_pos);

        let mut at = dest_index;
        if old_parent_idx == dest_parent_idx && old_pos < at {
            // Same sequence: the removal shifted everything after the old
            // position one slot left.
            at -= 1;
        }
        let dest_seq = self.sibling_seq_mut(dest_parent_idx);
        let at = at.min(dest_seq.len());
        dest_seq.insert(at, src_idx);
        if let Some(node) = self.node_mut(src_idx) {
            node.parent = dest_parent_idx;
        }
        Ok(())
    }

    /// Delete the node and its entire subtree.
    ///
    /// An absent id reports `NotFound` rather than silently succeeding,
    /// so callers decide whether that counts as done.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &NodeId) -> EditResult<()> {
        let idx = self
            .find(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        let parent_idx = self.node(idx).and_then(|n| n.parent);
        let seq = self.sibling_seq_mut(parent_idx);
        if let Some(pos) = seq.iter().position(|&c| c == idx) {
            seq.remove(pos);
        }

        // Collect first: child lists die with their nodes.
        let mut doomed = Vec::new();
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().copied());
                doomed.push(current);
            }
        }
        for dead in doomed {
            if let Some(node) = self.arena.remove(dead) {
                self.ids.remove(&node.id);
            }
        }
        Ok(())
    }

    /// Update title and/or color tag in place.
    ///
    /// `color: Some(None)` clears the tag; `None` leaves it untouched.
    /// Never touches the id or the children.
    #[instrument(level = "debug", skip(self))]
    pub fn update(
        &mut self,
        id: &NodeId,
        title: Option<String>,
        color: Option<Option<NodeColor>>,
    ) -> EditResult<()> {
        let idx = self
            .find(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        if let Some(node) = self.node_mut(idx) {
            if let Some(new_title) = title {
                node.title = new_title;
            }
            if let Some(new_color) = color {
                node.color = new_color;
            }
        }
        Ok(())
    }

    /// Flip the expansion flag; children and their order are untouched.
    /// Returns the new state.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_expanded(&mut self, id: &NodeId) -> EditResult<bool> {
        let idx = self
            .find(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        match self.node_mut(idx) {
            Some(node) => {
                node.expanded = !node.expanded;
                Ok(node.expanded)
            }
            None => Err(EditError::NotFound(id.clone())),
        }
    }
}
