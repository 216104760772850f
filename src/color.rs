use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Color tag for a node, drawn from a closed palette.
///
/// Tags are decorative only and carry no structural meaning. A node
/// without a tag is modeled as `Option::<NodeColor>::None`; resolving a
/// tag to an actual terminal style happens at the render boundary
/// (`cli::output`), never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

impl NodeColor {
    /// All palette entries, in display order.
    pub const ALL: [NodeColor; 7] = [
        NodeColor::Red,
        NodeColor::Orange,
        NodeColor::Yellow,
        NodeColor::Green,
        NodeColor::Blue,
        NodeColor::Purple,
        NodeColor::Gray,
    ];

    /// Lowercase palette name, as used in seed documents and CLI args.
    pub fn name(&self) -> &'static str {
        match self {
            NodeColor::Red => "red",
            NodeColor::Orange => "orange",
            NodeColor::Yellow => "yellow",
            NodeColor::Green => "green",
            NodeColor::Blue => "blue",
            NodeColor::Purple => "purple",
            NodeColor::Gray => "gray",
        }
    }
}

impl fmt::Display for NodeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
