//! Translation of drop gestures into structural edits.
//!
//! A gesture arrives in view coordinates: the index of the dragged row in
//! the visible listing, a drop target (a row index or a node id, both
//! gesture styles exist in the wild), and where relative to the target the
//! row was released. Translation resolves those against the listing as it
//! stood before the move and hands the result to [`Forest::move_node`] as
//! exactly one call. The removal-shift correction for same-sequence
//! moves is that contract's job, never re-derived here.

use clap::ValueEnum;
use tracing::{debug, instrument};

use crate::arena::{Forest, NodeId};
use crate::errors::{EditError, EditResult};

/// Where the dragged row lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DropPosition {
    /// Sibling directly before the target.
    Above,
    /// Sibling directly after the target.
    Below,
    /// Last child of the target (append policy: new content lands after
    /// the target's existing children).
    Inside,
}

/// Drop target as reported by the gesture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A row of the visible listing.
    Row(usize),
    /// A node id.
    Node(NodeId),
}

/// A reorder gesture in view coordinates.
///
/// `target: None` means the row was released outside any valid target;
/// such a gesture performs no edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRequest {
    pub source_row: usize,
    pub target: Option<DropTarget>,
    pub position: DropPosition,
}

impl ReorderRequest {
    pub fn new(source_row: usize, target: DropTarget, position: DropPosition) -> Self {
        Self {
            source_row,
            target: Some(target),
            position,
        }
    }

    /// A gesture that ended outside every target.
    pub fn cancelled(source_row: usize) -> Self {
        Self {
            source_row,
            target: None,
            position: DropPosition::Inside,
        }
    }
}

/// Apply a reorder gesture as exactly one structural move.
///
/// Returns `Ok(false)` when the gesture had no target (nothing was
/// edited), `Ok(true)` when a move was applied. Row indices that point
/// past the visible listing fail with `RowOutOfRange`; a drop into the
/// dragged node's own subtree fails with `Cycle`, leaving the forest
/// unchanged.
#[instrument(level = "debug", skip(forest))]
pub fn apply_reorder(forest: &mut Forest, request: &ReorderRequest) -> EditResult<bool> {
    let Some(target) = &request.target else {
        debug!("drop without target, nothing to do");
        return Ok(false);
    };

    // Pre-move snapshot; all coordinates below are resolved against it.
    let rows = forest.visible_nodes();
    let source_id = rows
        .get(request.source_row)
        .map(|row| row.id.clone())
        .ok_or(EditError::RowOutOfRange(request.source_row))?;
    let target_id = match target {
        DropTarget::Row(index) => rows
            .get(*index)
            .map(|row| row.id.clone())
            .ok_or(EditError::RowOutOfRange(*index))?,
        DropTarget::Node(id) => {
            if !forest.contains(id) {
                return Err(EditError::NotFound(id.clone()));
            }
            id.clone()
        }
    };

    let (dest_parent, dest_index) = match request.position {
        DropPosition::Inside => {
            let child_count = match forest.get(&target_id) {
                Some(node) => node.child_count(),
                None => return Err(EditError::NotFound(target_id)),
            };
            (Some(target_id), child_count)
        }
        DropPosition::Above | DropPosition::Below => {
            let location = forest
                .locate(&target_id)
                .ok_or_else(|| EditError::NotFound(target_id.clone()))?;
            let offset = usize::from(request.position == DropPosition::Below);
            (location.parent, location.index + offset)
        }
    };

    forest.move_node(&source_id, dest_parent.as_ref(), dest_index)?;
    Ok(true)
}
