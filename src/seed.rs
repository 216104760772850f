//! Seed forest documents.
//!
//! The host provides the initial forest at process start. The CLI host
//! reads it from a TOML document of nested node tables; nodes without an
//! explicit id get a fresh one. Start-up input only; edits are never
//! written back to the file.
//!
//! ```toml
//! [[node]]
//! id = "1"
//! title = "Root Node 1"
//! color = "blue"
//!
//!   [[node.children]]
//!   title = "Child Node 1.1"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::arena::{Forest, NodeId};
use crate::color::NodeColor;
use crate::editor::NewNode;
use crate::errors::SeedResult;

/// Top-level seed document: an ordered list of root nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDoc {
    #[serde(default, rename = "node")]
    pub nodes: Vec<SeedNode>,
}

/// One node of a seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedNode {
    pub title: String,
    #[serde(default)]
    pub id: Option<NodeId>,
    #[serde(default)]
    pub color: Option<NodeColor>,
    #[serde(default = "expanded_default")]
    pub expanded: bool,
    #[serde(default)]
    pub children: Vec<SeedNode>,
}

fn expanded_default() -> bool {
    true
}

/// Read and build a forest from a seed file.
#[instrument]
pub fn load(path: &Path) -> SeedResult<Forest> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Build a forest from seed document text.
pub fn parse(content: &str) -> SeedResult<Forest> {
    let doc: SeedDoc = toml::from_str(content)?;
    build(&doc)
}

/// Build a forest from a parsed document. Duplicate explicit ids are
/// rejected.
#[instrument(skip(doc))]
pub fn build(doc: &SeedDoc) -> SeedResult<Forest> {
    let mut forest = Forest::new();
    graft(&mut forest, None, &doc.nodes)?;
    Ok(forest)
}

fn graft(forest: &mut Forest, parent: Option<&NodeId>, nodes: &[SeedNode]) -> SeedResult<()> {
    for (position, seed) in nodes.iter().enumerate() {
        let mut node = NewNode::titled(&seed.title);
        if let Some(explicit) = seed.id.clone() {
            node = node.with_id(explicit);
        }
        if let Some(color) = seed.color {
            node = node.with_color(color);
        }
        if !seed.expanded {
            node = node.collapsed();
        }
        let id = forest.insert(parent, position, node)?;
        graft(forest, Some(&id), &seed.children)?;
    }
    Ok(())
}

const SAMPLE: &str = r#"
[[node]]
id = "1"
title = "Root Node 1"

  [[node.children]]
  id = "2"
  title = "Child Node 1.1"

  [[node.children]]
  id = "3"
  title = "Child Node 1.2"

[[node]]
id = "4"
title = "Root Node 2"

  [[node.children]]
  id = "5"
  title = "Child Node 2.1"
"#;

/// Built-in sample forest, used when no seed file is given.
pub fn sample() -> Forest {
    parse(SAMPLE).expect("built-in sample seed is valid")
}
