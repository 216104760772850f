use tracing::{debug, instrument};

use crate::arena::{Forest, NodeId};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::color::NodeColor;
use crate::editor::NewNode;
use crate::reorder::{apply_reorder, DropPosition, DropTarget, ReorderRequest};
use crate::seed;
use crate::tree_display::TreeDisplayConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    let mut forest = match &cli.forest {
        Some(path) => seed::load(path)?,
        None => seed::sample(),
    };

    match command {
        Commands::Show => _show(&forest),
        Commands::Tree => _tree(&forest),
        Commands::Add {
            title,
            parent,
            at,
            color,
            id,
        } => _add(
            &mut forest,
            title,
            parent.as_deref(),
            *at,
            *color,
            id.as_deref(),
        ),
        Commands::Edit {
            id,
            title,
            color,
            clear_color,
        } => _edit(&mut forest, id, title.clone(), *color, *clear_color),
        Commands::Rm { id } => _rm(&mut forest, id),
        Commands::Toggle { id } => _toggle(&mut forest, id),
        Commands::Move { id, parent, to } => _move(&mut forest, id, parent.as_deref(), *to),
        Commands::Reorder {
            source,
            position,
            target,
            row,
        } => _reorder(&mut forest, *source, *position, target.as_deref(), *row),
    }
}

#[instrument(skip(forest))]
fn _show(forest: &Forest) -> CliResult<()> {
    for visible in forest.visible_nodes() {
        output::row(&visible);
    }
    Ok(())
}

#[instrument(skip(forest))]
fn _tree(forest: &Forest) -> CliResult<()> {
    for tree in forest.to_display_trees() {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(forest))]
fn _add(
    forest: &mut Forest,
    title: &str,
    parent: Option<&str>,
    at: Option<usize>,
    color: Option<NodeColor>,
    id: Option<&str>,
) -> CliResult<()> {
    let parent_id = parent.map(NodeId::from);
    let mut node = NewNode::titled(title);
    node.id = id.map(NodeId::from);
    node.color = color;
    // No explicit position appends: out-of-range indices clamp
    let new_id = forest.insert(parent_id.as_ref(), at.unwrap_or(usize::MAX), node)?;
    output::success(&format!("added {}", new_id));
    _show(forest)
}

#[instrument(skip(forest))]
fn _edit(
    forest: &mut Forest,
    id: &str,
    title: Option<String>,
    color: Option<NodeColor>,
    clear_color: bool,
) -> CliResult<()> {
    let id = NodeId::from(id);
    let color_change = if clear_color {
        Some(None)
    } else {
        color.map(Some)
    };
    forest.update(&id, title, color_change)?;
    output::success(&format!("updated {}", id));
    _show(forest)
}

#[instrument(skip(forest))]
fn _rm(forest: &mut Forest, id: &str) -> CliResult<()> {
    let id = NodeId::from(id);
    let doomed = forest.subtree_ids(&id).len();
    forest.remove(&id)?;
    debug!("removed {} nodes", doomed);
    output::success(&format!("removed {} ({} nodes)", id, doomed));
    _show(forest)
}

#[instrument(skip(forest))]
fn _toggle(forest: &mut Forest, id: &str) -> CliResult<()> {
    let id = NodeId::from(id);
    let expanded = forest.toggle_expanded(&id)?;
    if expanded {
        output::success(&format!("expanded {}", id));
    } else {
        output::success(&format!("collapsed {}", id));
    }
    _show(forest)
}

#[instrument(skip(forest))]
fn _move(
    forest: &mut Forest,
    id: &str,
    parent: Option<&str>,
    to: Option<usize>,
) -> CliResult<()> {
    let id = NodeId::from(id);
    let parent_id = parent.map(NodeId::from);
    forest.move_node(&id, parent_id.as_ref(), to.unwrap_or(usize::MAX))?;
    output::success(&format!("moved {}", id));
    _show(forest)
}

#[instrument(skip(forest))]
fn _reorder(
    forest: &mut Forest,
    source: usize,
    position: DropPosition,
    target: Option<&str>,
    row: Option<usize>,
) -> CliResult<()> {
    let target = match (target, row) {
        (_, Some(index)) => DropTarget::Row(index),
        (Some(id), None) => DropTarget::Node(NodeId::from(id)),
        (None, None) => {
            // clap enforces one of the two; unreachable in practice
            return _show(forest);
        }
    };
    let request = ReorderRequest::new(source, target, position);
    if apply_reorder(forest, &request)? {
        output::success(&format!("reordered row {}", source));
    } else {
        output::info("nothing to do");
    }
    _show(forest)
}
