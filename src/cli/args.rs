//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

use crate::color::NodeColor;
use crate::reorder::DropPosition;

/// Structural outline editor: ordered multi-root trees with
/// expand/collapse-aware flattening and drag-drop style reordering
#[derive(Parser, Debug)]
#[command(name = "treedit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Use multiple times for more verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Seed forest file (TOML). Falls back to a built-in sample
    #[arg(short = 'f', long, global = true, value_hint = ValueHint::FilePath)]
    pub forest: Option<PathBuf>,

    /// Print version info
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List visible rows (expansion-aware, depth-indented)
    Show,

    /// Render the full structure, collapsed subtrees included
    Tree,

    /// Insert a new node
    Add {
        /// Node title
        title: String,

        /// Parent node id (omit for root level)
        #[arg(short, long)]
        parent: Option<String>,

        /// Position among siblings (default: append)
        #[arg(long)]
        at: Option<usize>,

        /// Color tag
        #[arg(short, long, value_enum)]
        color: Option<NodeColor>,

        /// Explicit id (default: generated)
        #[arg(long)]
        id: Option<String>,
    },

    /// Change a node's title or color tag
    Edit {
        /// Node id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New color tag
        #[arg(short, long, value_enum, conflicts_with = "clear_color")]
        color: Option<NodeColor>,

        /// Remove the color tag
        #[arg(long)]
        clear_color: bool,
    },

    /// Delete a node and its whole subtree
    Rm {
        /// Node id
        id: String,
    },

    /// Expand or collapse a node
    Toggle {
        /// Node id
        id: String,
    },

    /// Move a node (with its subtree) to a new parent and position
    Move {
        /// Node id
        id: String,

        /// Destination parent id (omit for root level)
        #[arg(short, long)]
        parent: Option<String>,

        /// Position among the destination's children (default: append)
        #[arg(long)]
        to: Option<usize>,
    },

    /// Re-drop a visible row relative to another, drag-and-drop style
    Reorder {
        /// View index of the dragged row
        source: usize,

        /// Where to land relative to the target
        #[arg(value_enum)]
        position: DropPosition,

        /// Target node id (or use --row)
        #[arg(required_unless_present = "row", conflicts_with = "row")]
        target: Option<String>,

        /// Target as a view index instead of an id
        #[arg(long)]
        row: Option<usize>,
    },
}
