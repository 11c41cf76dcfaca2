//! Core in-memory catalog data structures.

use crate::domain::{Family, FamilyId, Game, GameId, Relation};
use std::collections::{HashMap, HashSet};

/// Inner catalog structure (not thread-safe).
///
/// Wrapped in `Arc<Mutex<>>` by [`super::InMemoryCatalog`].
pub(crate) struct CatalogInner {
    /// Families in file order
    pub(super) families: Vec<Family>,

    /// Family ID to position in `families`
    pub(super) family_index: HashMap<FamilyId, usize>,

    /// Games in file order
    pub(super) games: Vec<Game>,

    /// Game ID to position in `games`. With duplicates the last record wins.
    pub(super) game_index: HashMap<GameId, usize>,

    /// Positions in `games` for each known family, in file order
    pub(super) family_games: HashMap<FamilyId, Vec<usize>>,

    /// Relations in file order
    pub(super) relations: Vec<Relation>,
}

impl CatalogInner {
    /// Index the given records.
    pub(crate) fn new(families: Vec<Family>, games: Vec<Game>, relations: Vec<Relation>) -> Self {
        let family_index: HashMap<FamilyId, usize> = families
            .iter()
            .enumerate()
            .map(|(idx, family)| (family.id.clone(), idx))
            .collect();

        let mut game_index = HashMap::with_capacity(games.len());
        let mut family_games: HashMap<FamilyId, Vec<usize>> = HashMap::new();
        for (idx, game) in games.iter().enumerate() {
            game_index.insert(game.id.clone(), idx);
            if let Some(family_id) = game.family_id.as_ref().filter(|id| family_index.contains_key(*id)) {
                family_games.entry(family_id.clone()).or_default().push(idx);
            }
        }

        Self {
            families,
            family_index,
            games,
            game_index,
            family_games,
            relations,
        }
    }

    pub(super) fn family(&self, id: &FamilyId) -> Option<&Family> {
        self.family_index.get(id).map(|&idx| &self.families[idx])
    }

    pub(super) fn games_in_family(&self, id: &FamilyId) -> Vec<Game> {
        self.family_games
            .get(id)
            .map(|positions| positions.iter().map(|&idx| self.games[idx].clone()).collect())
            .unwrap_or_default()
    }

    /// Whether a game is assigned to a family the catalog knows.
    pub(super) fn is_assigned(&self, game: &Game) -> bool {
        game.family_id
            .as_ref()
            .is_some_and(|id| self.family_index.contains_key(id))
    }

    /// Relations with at least one endpoint in `games`.
    pub(super) fn relations_touching(&self, games: &[Game]) -> Vec<Relation> {
        let ids: HashSet<&GameId> = games.iter().map(|g| &g.id).collect();
        self.relations
            .iter()
            .filter(|r| ids.contains(&r.source_game_id) || ids.contains(&r.target_game_id))
            .cloned()
            .collect()
    }
}
