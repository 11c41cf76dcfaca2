//! Spanning tree of a family, as discovered by the traversal.

use super::analysis::FamilyAnalysis;
use crate::domain::{Game, GameId, RelationType};
use serde::Serialize;
use std::collections::HashMap;

/// A game in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Game ID
    pub id: GameId,

    /// Game name
    pub name: String,

    /// Year of first publication
    pub year_published: Option<i32>,

    /// Relation to the parent node (`None` for the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationType>,

    /// Distance from the root
    pub depth: usize,

    /// Index of the parent in [`FamilyTree::nodes`] (`None` for the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,

    /// Indexes of the games first reached through this one, in visit order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
}

/// The breadth-first spanning tree of a family, rooted at its root game.
///
/// Each reachable game appears exactly once, under the game it was first
/// reached from. Relations that lead to an already-placed game do not show.
///
/// Nodes are stored flat in visit order and linked by index, so chains of
/// any length can be built, walked, serialized and dropped without
/// recursion. The root is always node 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyTree {
    nodes: Vec<TreeNode>,

    /// Reachable games left out because of a depth limit
    pub truncated: usize,
}

impl FamilyTree {
    /// Build the tree from an analysis.
    ///
    /// `max_depth` limits how deep the tree goes (the root is depth 0).
    /// Returns `None` for an empty family.
    pub fn from_analysis(analysis: &FamilyAnalysis, max_depth: Option<usize>) -> Option<Self> {
        analysis.root()?;
        let reach = analysis.reachability();
        let within = |depth: usize| max_depth.is_none_or(|max| depth <= max);

        // Visit order is breadth-first, so a parent is always placed before
        // its children.
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(reach.len());
        let mut index: HashMap<&GameId, usize> = HashMap::with_capacity(reach.len());
        let mut truncated = 0;

        // Later duplicates overwrite earlier ones, matching `FamilyAnalysis::game`.
        let games: HashMap<&GameId, &Game> =
            analysis.games().iter().map(|g| (&g.id, g)).collect();

        for id in reach.order() {
            let Some(visit) = reach.visit(id) else {
                continue;
            };
            if !within(visit.depth) {
                truncated += 1;
                continue;
            }

            let parent = visit
                .via
                .as_ref()
                .and_then(|(parent_id, _)| index.get(parent_id).copied());
            let (name, year_published) = games
                .get(id)
                .map(|g| (g.name.clone(), g.year_published))
                .unwrap_or_default();

            let position = nodes.len();
            if let Some(parent) = parent {
                nodes[parent].children.push(position);
            }
            index.insert(id, position);
            nodes.push(TreeNode {
                id: id.clone(),
                name,
                year_published,
                relation: visit.via.as_ref().map(|(_, rel)| rel.clone()),
                depth: visit.depth,
                parent,
                children: Vec::new(),
            });
        }

        if nodes.is_empty() {
            return None;
        }
        Some(Self { nodes, truncated })
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// All nodes in visit order; the root comes first.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Children of `node`, in visit order.
    pub fn children<'a>(&'a self, node: &'a TreeNode) -> impl Iterator<Item = &'a TreeNode> + 'a {
        node.children.iter().map(move |&i| &self.nodes[i])
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
