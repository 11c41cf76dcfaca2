//! Breadth-first reachability from the root game.

use super::graph::RelationGraph;
use crate::domain::{GameId, RelationType};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet, VecDeque};

/// How the traversal first reached a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Edges followed from the root; the root itself is 0.
    pub depth: usize,

    /// Parent game and the relation followed from it. `None` for the root.
    pub via: Option<(GameId, RelationType)>,
}

/// The set of games reachable from a root, with how each was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachability {
    visits: HashMap<GameId, Visit>,
    order: Vec<GameId>,
}

impl Reachability {
    /// Whether the game was reached.
    pub fn contains(&self, id: &GameId) -> bool {
        self.visits.contains_key(id)
    }

    /// How the game was reached, if it was.
    pub fn visit(&self, id: &GameId) -> Option<&Visit> {
        self.visits.get(id)
    }

    /// Depth of a reached game.
    pub fn depth(&self, id: &GameId) -> Option<usize> {
        self.visits.get(id).map(|v| v.depth)
    }

    /// Reached games in the order the traversal visited them, root first.
    pub fn order(&self) -> &[GameId] {
        &self.order
    }

    /// Number of reached games.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was reached (only when the root is not in the graph).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Queue entry: node, depth, and the edge it was enqueued through.
type Pending<'g> = (NodeIndex, usize, Option<(NodeIndex, &'g RelationType)>);

/// Breadth-first traversal from `root` over parent -> child edges.
///
/// A game is marked visited when it is dequeued; children already visited
/// are not enqueued again. Parallel edges and cycles therefore cannot cause
/// repeated visits or non-termination. Because the queue is FIFO, the first
/// dequeue of a game happens at its shortest depth from the root.
///
/// Edges are never followed in reverse. A root that is not in the graph
/// yields an empty result.
pub fn traverse(graph: &RelationGraph, root: &GameId) -> Reachability {
    let mut reach = Reachability::default();
    let Some(root_node) = graph.node(root) else {
        return reach;
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<Pending<'_>> = VecDeque::new();
    queue.push_back((root_node, 0, None));

    while let Some((node, depth, via)) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }

        let id = graph.game_id(node).clone();
        let via = via.map(|(parent, relation_type)| {
            (graph.game_id(parent).clone(), relation_type.clone())
        });
        reach.order.push(id.clone());
        reach.visits.insert(id, Visit { depth, via });

        for (child, relation_type) in graph.child_edges(node) {
            if !visited.contains(&child) {
                queue.push_back((child, depth + 1, Some((node, relation_type))));
            }
        }
    }

    reach
}
