//! Family tree rendering for `tabletop tree` output.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use super::color::{bold, colorize_id, dimmed, format_year, orphan_icon};
use super::{write_json, OutputConfig, OutputMode};
use crate::domain::{FamilyId, Game};
use crate::family::{FamilyTree, RootReason, TreeNode};

/// JSON view of a tree command result.
#[derive(Debug, Serialize)]
struct TreeOutput<'a> {
    family: &'a FamilyId,
    root_reason: Option<RootReason>,
    tree: Option<&'a FamilyTree>,
    orphans: &'a [&'a Game],
}

/// Print a family tree followed by the family's orphans.
///
/// Renders a tree like:
/// ```text
/// ◆ catan Catan [1995]
/// ├── seafarers Catan: Seafarers [1997] (expansion_of)
/// │   └── explorers Catan: Explorers & Pirates [2013] (expansion_of)
/// └── cities Catan: Cities & Knights [1998] (expansion_of)
/// ```
pub fn print_family_tree(
    family: &FamilyId,
    tree: Option<&FamilyTree>,
    root_reason: Option<RootReason>,
    orphans: &[&Game],
    mode: OutputMode,
) -> crate::error::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            match tree {
                Some(tree) => write_family_tree_text(&mut handle, tree, &config)?,
                None => writeln!(handle, "Family {} has no games.", family)?,
            }
            write_orphan_section(&mut handle, orphans, &config)?;
            Ok(())
        }
        OutputMode::Json => write_json(
            &mut handle,
            &TreeOutput {
                family,
                root_reason,
                tree,
                orphans,
            },
        ),
    }
}

fn node_label(node: &TreeNode, config: &OutputConfig) -> String {
    format!(
        "{} {} [{}]",
        colorize_id(node.id.as_str(), config),
        node.name,
        format_year(node.year_published, config)
    )
}

/// Render the tree with ASCII art connectors.
fn write_family_tree_text<W: Write>(
    w: &mut W,
    tree: &FamilyTree,
    config: &OutputConfig,
) -> io::Result<()> {
    let root_icon = if config.use_ascii { "*" } else { "◆" };
    let root_icon_str = if config.use_colors {
        root_icon.cyan().bold().to_string()
    } else {
        root_icon.to_string()
    };

    writeln!(w, "{} {}", root_icon_str, node_label(tree.root(), config))?;
    write_tree_children(w, tree, config)?;

    if tree.truncated > 0 {
        writeln!(
            w,
            "{}",
            dimmed(
                &format!("({} more games below the depth limit)", tree.truncated),
                config
            )
        )?;
    }
    Ok(())
}

/// A node whose children are being written.
struct Frame {
    node: usize,
    next_child: usize,
    /// Length of the shared prefix before this node's segment was added
    restore_len: usize,
}

/// Render everything below the root with connector lines, depth first.
///
/// Walks an explicit frame stack. `prefix` holds one segment per open
/// ancestor: a vertical line (`│`) when that ancestor still has siblings
/// below.
fn write_tree_children<W: Write>(
    w: &mut W,
    tree: &FamilyTree,
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };
    let nodes = tree.nodes();

    let mut prefix = String::new();
    let mut stack = vec![Frame {
        node: 0,
        next_child: 0,
        restore_len: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let siblings = &nodes[frame.node].children;
        let Some(&child_index) = siblings.get(frame.next_child) else {
            prefix.truncate(frame.restore_len);
            stack.pop();
            continue;
        };
        frame.next_child += 1;
        let is_last = frame.next_child == siblings.len();

        let child = &nodes[child_index];
        let connector = dimmed(if is_last { corner } else { branch }, config);
        let relation = child
            .relation
            .as_ref()
            .map(|rel| format!(" {}", dimmed(&format!("({})", rel), config)))
            .unwrap_or_default();

        writeln!(
            w,
            "{}{}{}{}",
            prefix,
            connector,
            node_label(child, config),
            relation
        )?;

        if !child.children.is_empty() {
            let restore_len = prefix.len();
            prefix.push_str(&dimmed(if is_last { space } else { pipe }, config));
            stack.push(Frame {
                node: child_index,
                next_child: 0,
                restore_len,
            });
        }
    }

    Ok(())
}

/// Render the orphan list shown under a tree.
fn write_orphan_section<W: Write>(
    w: &mut W,
    orphans: &[&Game],
    config: &OutputConfig,
) -> io::Result<()> {
    if orphans.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold(&format!("Not reachable from root ({}):", orphans.len()), config)
    )?;
    for game in orphans {
        writeln!(
            w,
            "  {} {} {} [{}]",
            orphan_icon(config),
            colorize_id(game.id.as_str(), config),
            game.name,
            format_year(game.year_published, config)
        )?;
    }
    Ok(())
}
