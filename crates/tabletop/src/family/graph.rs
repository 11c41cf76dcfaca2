//! Relation graph construction using petgraph.

use crate::domain::{Game, GameId, Relation, RelationType};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Parent -> child graph of a family's relations.
///
/// Nodes hold a [`GameId`], edges the [`RelationType`] of the relation they
/// came from. Edge direction is target -> source (parent to derived game).
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    /// The relation graph.
    graph: DiGraph<GameId, RelationType>,

    /// Lookup from game ID to node. One node per distinct ID.
    node_map: HashMap<GameId, NodeIndex>,

    /// Relations dropped because an endpoint is not in the game set.
    skipped_relations: usize,
}

impl RelationGraph {
    /// Build the graph for a game set.
    ///
    /// A relation is kept only when both its source and target are in
    /// `games`; anything else (cross-family or dangling) is skipped and
    /// counted. Kept relations are added in input order. Duplicate relations
    /// produce parallel edges, which the traversal tolerates.
    pub fn build(games: &[Game], relations: &[Relation]) -> Self {
        let mut graph = DiGraph::with_capacity(games.len(), relations.len());
        let mut node_map = HashMap::with_capacity(games.len());

        for game in games {
            node_map
                .entry(game.id.clone())
                .or_insert_with(|| graph.add_node(game.id.clone()));
        }

        let mut skipped_relations = 0;
        for relation in relations {
            let (Some(&parent), Some(&child)) = (
                node_map.get(&relation.target_game_id),
                node_map.get(&relation.source_game_id),
            ) else {
                tracing::trace!(
                    source = %relation.source_game_id,
                    target = %relation.target_game_id,
                    "Skipping relation outside the game set"
                );
                skipped_relations += 1;
                continue;
            };
            graph.add_edge(parent, child, relation.relation_type.clone());
        }

        Self {
            graph,
            node_map,
            skipped_relations,
        }
    }

    /// Number of distinct games in the graph.
    pub fn game_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of relations kept as edges.
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of relations skipped because an endpoint was outside the game set.
    pub fn skipped_relations(&self) -> usize {
        self.skipped_relations
    }

    pub(super) fn node(&self, id: &GameId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(super) fn game_id(&self, node: NodeIndex) -> &GameId {
        &self.graph[node]
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// petgraph walks a node's edge list newest first, so the list is
    /// reversed.
    pub(super) fn child_edges(&self, node: NodeIndex) -> Vec<(NodeIndex, &RelationType)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(node)
            .map(|edge| (edge.target(), edge.weight()))
            .collect();
        edges.reverse();
        edges
    }
}
