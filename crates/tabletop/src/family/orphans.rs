//! Orphan detection: family games the base game cannot reach.

use super::graph::RelationGraph;
use super::root::select_root;
use super::traversal::traverse;
use crate::domain::{Game, GameId, Relation};

/// Games of a family that are not reachable from its root.
///
/// The root is chosen by [`select_root`], the graph by
/// [`RelationGraph::build`] and reachability by [`traverse`]. The result
/// keeps the order of `games`. An empty `games` yields an empty result.
///
/// Duplicate IDs in `games` are treated as one game: every entry with an
/// unreached ID is returned.
pub fn orphan_games<'a>(
    games: &'a [Game],
    relations: &[Relation],
    base_game_id: Option<&GameId>,
) -> Vec<&'a Game> {
    let Some(root) = select_root(games, base_game_id) else {
        return Vec::new();
    };

    let graph = RelationGraph::build(games, relations);
    let reach = traverse(&graph, &root.game.id);

    games.iter().filter(|g| !reach.contains(&g.id)).collect()
}

/// Number of orphan games in a family.
///
/// A family of zero or one games never has orphans, so those return 0
/// without building the graph.
pub fn orphan_count(games: &[Game], relations: &[Relation], base_game_id: Option<&GameId>) -> usize {
    if games.len() <= 1 {
        return 0;
    }
    orphan_games(games, relations, base_game_id).len()
}
