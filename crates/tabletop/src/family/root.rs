//! Root game selection.

use crate::domain::{Game, GameId};
use serde::Serialize;
use std::cmp::Ordering;

/// Why a game was chosen as the root of its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootReason {
    /// The family's designated base game.
    Explicit,

    /// No base game was designated; the oldest game was chosen.
    OldestPublished,

    /// A base game was designated but is not part of the game set, so the
    /// oldest game was chosen instead.
    BaseGameMissing,
}

impl std::fmt::Display for RootReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "designated base game"),
            Self::OldestPublished => write!(f, "oldest published"),
            Self::BaseGameMissing => write!(f, "oldest published (base game not in family)"),
        }
    }
}

/// The selected root game and the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSelection<'a> {
    /// The root game.
    pub game: &'a Game,

    /// Which rule selected it.
    pub reason: RootReason,
}

/// Select the root game of a family.
///
/// - If `base_game_id` names a game in `games`, that game is the root. With
///   duplicate IDs the last entry wins, matching the graph's lookup map.
/// - Otherwise the root is the game with the smallest `year_published`
///   (games without a year sort after all dated games), ties broken by the
///   shorter name in UTF-16 code units. Any remaining tie keeps input order.
///
/// The name-length tie break is a heuristic: base titles tend to be shorter
/// than their subtitled expansions.
///
/// Returns `None` only when `games` is empty.
pub fn select_root<'a>(games: &'a [Game], base_game_id: Option<&GameId>) -> Option<RootSelection<'a>> {
    if let Some(base_id) = base_game_id {
        if let Some(game) = games.iter().rev().find(|g| &g.id == base_id) {
            return Some(RootSelection {
                game,
                reason: RootReason::Explicit,
            });
        }
    }

    let reason = if base_game_id.is_some() {
        RootReason::BaseGameMissing
    } else {
        RootReason::OldestPublished
    };

    // `min_by` keeps the first of equally minimal elements.
    games
        .iter()
        .min_by(|a, b| compare_root_candidates(a, b))
        .map(|game| RootSelection { game, reason })
}

/// Ordering used by the fallback rule: year ascending with missing years
/// last, then name length ascending.
///
/// Length is in UTF-16 code units; a character outside the Basic
/// Multilingual Plane counts as 2.
fn compare_root_candidates(a: &Game, b: &Game) -> Ordering {
    let by_year = match (a.year_published, b.year_published) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_year.then_with(|| name_length(&a.name).cmp(&name_length(&b.name)))
}

fn name_length(name: &str) -> usize {
    name.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, name: &str, year: Option<i32>) -> Game {
        Game::new(id, name, year)
    }

    #[test]
    fn empty_set_has_no_root() {
        assert!(select_root(&[], None).is_none());
        assert!(select_root(&[], Some(&GameId::new("x"))).is_none());
    }

    #[test]
    fn explicit_base_game_wins_over_age() {
        let games = vec![game("a", "A", Some(1990)), game("b", "B", Some(1980))];

        let root = select_root(&games, Some(&GameId::new("a"))).unwrap();

        assert_eq!(root.game.id, GameId::new("a"));
        assert_eq!(root.reason, RootReason::Explicit);
    }

    #[test]
    fn missing_base_game_falls_back_to_oldest() {
        let games = vec![game("a", "A", Some(1990)), game("b", "B", Some(1980))];

        let root = select_root(&games, Some(&GameId::new("gone"))).unwrap();

        assert_eq!(root.game.id, GameId::new("b"));
        assert_eq!(root.reason, RootReason::BaseGameMissing);
    }

    #[test]
    fn missing_years_sort_last() {
        let games = vec![
            game("undated", "U", None),
            game("late", "Late", Some(2020)),
        ];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("late"));
        assert_eq!(root.reason, RootReason::OldestPublished);
    }

    #[test]
    fn same_year_prefers_shorter_name() {
        let games = vec![
            game("exp", "Dominion: Intrigue", Some(2008)),
            game("base", "Dominion", Some(2008)),
        ];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("base"));
    }

    #[test]
    fn name_length_ignores_utf8_byte_count() {
        // "Été" is 3 code units but 5 bytes; "Ages" is 4 code units.
        let games = vec![game("ages", "Ages", Some(2000)), game("ete", "Été", Some(2000))];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("ete"));
    }

    #[test]
    fn name_length_counts_astral_characters_twice() {
        // Two dice are 2 characters but 4 UTF-16 code units; "Die" is 3.
        let games = vec![game("dice", "🎲🎲", Some(2000)), game("die", "Die", Some(2000))];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("die"));
    }

    #[test]
    fn full_tie_keeps_input_order() {
        let games = vec![game("first", "Same", Some(2001)), game("second", "Same", Some(2001))];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("first"));
    }

    #[test]
    fn all_undated_uses_name_length() {
        let games = vec![game("long", "Longer Title", None), game("short", "Short", None)];

        let root = select_root(&games, None).unwrap();

        assert_eq!(root.game.id, GameId::new("short"));
    }

    #[test]
    fn duplicate_base_id_resolves_to_last_entry() {
        let games = vec![game("a", "First copy", Some(1990)), game("a", "Second copy", Some(1991))];

        let root = select_root(&games, Some(&GameId::new("a"))).unwrap();

        assert_eq!(root.game.name, "Second copy");
    }
}
