use thiserror::Error;

use crate::arena::NodeId;

/// Failures of structural edits and gesture translation.
///
/// Out-of-range sibling indices are not an error: `insert` and
/// `move_node` clamp them to append. View-row indices cannot be clamped
/// meaningfully, so the translator reports them as [`EditError::RowOutOfRange`].
#[derive(Error, Debug)]
pub enum EditError {
    #[error("node not found: {0}")]
    NotFound(NodeId),

    #[error("cannot move {src} into its own subtree (under {dest})")]
    Cycle { src: NodeId, dest: NodeId },

    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("no visible row at index {0}")]
    RowOutOfRange(usize),

    #[error("internal forest operation failed: {0}")]
    Internal(String),
}

pub type EditResult<T> = Result<T, EditError>;

/// Failures while loading a seed forest document.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("invalid seed document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Edit(#[from] EditError),
}

pub type SeedResult<T> = Result<T, SeedError>;
