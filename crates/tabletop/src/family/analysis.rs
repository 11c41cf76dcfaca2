//! Full family analysis for reporting.

use super::graph::RelationGraph;
use super::root::{select_root, RootReason};
use super::traversal::{traverse, Reachability};
use crate::domain::{Game, GameId, Relation};

/// Result of analyzing one family's games and relations.
///
/// Holds owned copies of the games so it can outlive the snapshot it was
/// computed from. The orphan list matches
/// [`orphan_games`](super::orphan_games) for the same input.
#[derive(Debug, Clone)]
pub struct FamilyAnalysis {
    games: Vec<Game>,
    root: Option<(GameId, RootReason)>,
    graph: RelationGraph,
    reach: Reachability,
}

/// Analyze a family.
///
/// Runs root selection, graph building and traversal once, keeping each
/// result. Logs a warning when a designated base game is not in `games`.
pub fn analyze(games: &[Game], relations: &[Relation], base_game_id: Option<&GameId>) -> FamilyAnalysis {
    let graph = RelationGraph::build(games, relations);
    let root = select_root(games, base_game_id).map(|sel| (sel.game.id.clone(), sel.reason));

    if let Some((root_id, RootReason::BaseGameMissing)) = &root {
        tracing::warn!(
            base_game = ?base_game_id.map(GameId::as_str),
            fallback_root = %root_id,
            "Designated base game is not part of the family; using oldest game"
        );
    }

    let reach = root
        .as_ref()
        .map(|(root_id, _)| traverse(&graph, root_id))
        .unwrap_or_default();

    tracing::debug!(
        games = games.len(),
        distinct_games = graph.game_count(),
        relations = graph.relation_count(),
        skipped_relations = graph.skipped_relations(),
        reachable = reach.len(),
        "Analyzed family"
    );

    FamilyAnalysis {
        games: games.to_vec(),
        root,
        graph,
        reach,
    }
}

impl FamilyAnalysis {
    /// All games of the family, in input order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// The root game, if the family has any games.
    pub fn root(&self) -> Option<&Game> {
        let (root_id, _) = self.root.as_ref()?;
        self.game(root_id)
    }

    /// Why the root was chosen.
    pub fn root_reason(&self) -> Option<RootReason> {
        self.root.as_ref().map(|(_, reason)| *reason)
    }

    /// Look up a family game by ID. With duplicate IDs the last entry wins.
    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().rev().find(|g| &g.id == id)
    }

    /// The relation graph the traversal ran on.
    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Games reached from the root and how.
    pub fn reachability(&self) -> &Reachability {
        &self.reach
    }

    /// Games not reachable from the root, in input order.
    pub fn orphans(&self) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| !self.reach.contains(&g.id))
            .collect()
    }

    /// Number of game records whose ID was reached.
    ///
    /// Counts records, like [`orphan_count`](Self::orphan_count), so the two
    /// always add up to `games().len()` even with duplicate IDs.
    pub fn reachable_count(&self) -> usize {
        self.games
            .iter()
            .filter(|g| self.reach.contains(&g.id))
            .count()
    }

    /// Number of orphans.
    pub fn orphan_count(&self) -> usize {
        self.games
            .iter()
            .filter(|g| !self.reach.contains(&g.id))
            .count()
    }

    /// Relations ignored because an endpoint was outside the family.
    pub fn skipped_relations(&self) -> usize {
        self.graph.skipped_relations()
    }
}
