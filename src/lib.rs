//! Structural outline editor: an ordered, multi-root tree of labeled
//! nodes with expand/collapse-aware flattening and drag-drop style
//! reordering.
//!
//! The canonical forest lives in an arena ([`Forest`]); all mutation goes
//! through the editing operations (insert / move / remove / update /
//! toggle), which keep the forest well-formed after every call. The
//! visible listing ([`Forest::visible_nodes`]) is recomputed on demand,
//! and [`reorder::apply_reorder`] turns a drop gesture in view
//! coordinates into exactly one structural move.
//!
//! ```
//! use treedit::{DropPosition, DropTarget, Forest, NewNode, ReorderRequest};
//!
//! let mut forest = Forest::new();
//! let projects = forest.insert(None, 0, NewNode::titled("Projects")).unwrap();
//! let inbox = forest.insert(Some(&projects), 0, NewNode::titled("Inbox")).unwrap();
//! forest.insert(Some(&projects), 1, NewNode::titled("Archive")).unwrap();
//!
//! // Drag "Inbox" (row 1) below "Archive" (row 2).
//! let request = ReorderRequest::new(1, DropTarget::Row(2), DropPosition::Below);
//! treedit::apply_reorder(&mut forest, &request).unwrap();
//!
//! let titles: Vec<_> = forest.visible_nodes().iter().map(|r| r.title.clone()).collect();
//! assert_eq!(titles, vec!["Projects", "Archive", "Inbox"]);
//! # let _ = inbox;
//! ```

pub mod arena;
pub mod cli;
pub mod color;
pub mod editor;
pub mod errors;
pub mod exitcode;
pub mod reorder;
pub mod seed;
pub mod tree_display;
pub mod util;
pub mod visible;

pub use arena::{Forest, Location, Node, NodeId};
pub use color::NodeColor;
pub use editor::NewNode;
pub use errors::{EditError, EditResult, SeedError, SeedResult};
pub use reorder::{apply_reorder, DropPosition, DropTarget, ReorderRequest};
pub use visible::VisibleNode;
