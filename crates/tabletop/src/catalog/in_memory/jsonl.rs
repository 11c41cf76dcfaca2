//! JSONL loading for the in-memory catalog.
//!
//! Reads the games, families and relations files and reports data quality
//! problems as [`LoadWarning`]s instead of failing the load.

use super::inner::CatalogInner;
use crate::catalog::CatalogStore;
use crate::commands::init::DataPaths;
use crate::domain::{Family, FamilyId, Game, GameId, Relation};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tabletop_jsonl::{read_jsonl_resilient, Warning as JsonlWarning};
use tokio::sync::Mutex;

/// Which data file a warning came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    /// `games.jsonl`
    Games,
    /// `families.jsonl`
    Families,
    /// `relations.jsonl`
    Relations,
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Games => "games",
            Self::Families => "families",
            Self::Relations => "relations",
        })
    }
}

/// Warnings that can occur during catalog loading.
///
/// These are non-fatal: the load continues and the problematic data is
/// skipped or kept as described on each variant.
///
/// # Handling Warnings
///
/// ```no_run
/// # use tabletop::catalog::in_memory::{load_catalog, LoadWarning};
/// # use tabletop::commands::init::DataConfig;
/// # use std::path::Path;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let paths = DataConfig::default().resolve(Path::new("."));
/// let (_catalog, warnings) = load_catalog(&paths).await?;
///
/// for warning in warnings {
///     match warning {
///         LoadWarning::DanglingRelation { source, target, .. } => {
///             eprintln!("Dropped relation {} -> {}", source, target);
///         }
///         other => eprintln!("{}", other),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line that couldn't be parsed.
    ///
    /// **Effect**: Line is skipped entirely.
    MalformedJson {
        /// Source file
        file: DataFile,
        /// 1-based line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// A record that parsed but failed validation (blank ID, empty name).
    ///
    /// **Effect**: Record is skipped.
    InvalidRecord {
        /// Source file
        file: DataFile,
        /// 1-based position among the parsed records of the file
        record_number: usize,
        /// Validation message
        error: String,
    },

    /// A game ID appears more than once.
    ///
    /// **Effect**: All records are kept; lookups by ID return the last one.
    DuplicateGame {
        /// The repeated ID
        game_id: GameId,
    },

    /// A family ID appears more than once.
    ///
    /// **Effect**: The later record replaces the earlier one.
    DuplicateFamily {
        /// The repeated ID
        family_id: FamilyId,
    },

    /// A game names a family that isn't in the families file.
    ///
    /// **Effect**: The game is loaded as unassigned.
    UnknownFamily {
        /// The game
        game_id: GameId,
        /// The missing family
        family_id: FamilyId,
    },

    /// A relation endpoint is not a known game.
    ///
    /// **Effect**: The relation is dropped.
    DanglingRelation {
        /// Relation source
        source: GameId,
        /// Relation target
        target: GameId,
        /// The endpoint that is missing
        missing: GameId,
    },

    /// A family's base game is missing or belongs to another family.
    ///
    /// **Effect**: The family is kept; its analysis falls back to the oldest
    /// game.
    UnknownBaseGame {
        /// The family
        family_id: FamilyId,
        /// The designated base game
        base_game_id: GameId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson {
                file,
                line_number,
                error,
            } => write!(f, "{} line {}: malformed record: {}", file, line_number, error),
            Self::InvalidRecord {
                file,
                record_number,
                error,
            } => write!(f, "{} record {}: {}", file, record_number, error),
            Self::DuplicateGame { game_id } => write!(f, "duplicate game id '{}'", game_id),
            Self::DuplicateFamily { family_id } => {
                write!(f, "duplicate family id '{}'", family_id)
            }
            Self::UnknownFamily { game_id, family_id } => write!(
                f,
                "game '{}' references unknown family '{}'",
                game_id, family_id
            ),
            Self::DanglingRelation {
                source,
                target,
                missing,
            } => write!(
                f,
                "relation {} -> {} references unknown game '{}'",
                source, target, missing
            ),
            Self::UnknownBaseGame {
                family_id,
                base_game_id,
            } => write!(
                f,
                "family '{}' has base game '{}' which is not one of its games",
                family_id, base_game_id
            ),
        }
    }
}

/// Read one data file, converting parse warnings and dropping records that
/// fail `validate`.
async fn load_records<T, F>(
    path: &Path,
    file: DataFile,
    validate: F,
    warnings: &mut Vec<LoadWarning>,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> std::result::Result<(), String>,
{
    let (parsed, jsonl_warnings) = read_jsonl_resilient::<T, _>(path).await?;

    for warning in jsonl_warnings {
        let (line_number, error) = match warning {
            JsonlWarning::MalformedJson { line_number, error } => (line_number, error),
            JsonlWarning::SkippedLine {
                line_number,
                reason,
            } => (line_number, reason),
        };
        warnings.push(LoadWarning::MalformedJson {
            file,
            line_number,
            error,
        });
    }

    // record_number counts parsed records, not file lines.
    let mut records = Vec::with_capacity(parsed.len());
    for (index, record) in parsed.into_iter().enumerate() {
        if let Err(error) = validate(&record) {
            warnings.push(LoadWarning::InvalidRecord {
                file,
                record_number: index + 1,
                error,
            });
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

/// Load a catalog from its JSONL data files.
///
/// Families are read first, then games, then relations, so each pass can
/// check references against the previous ones.
///
/// # Error Handling
///
/// - **Malformed lines / invalid records**: skipped with a warning
/// - **Duplicate IDs**: warned; games keep every record, families keep the last
/// - **Unknown family on a game**: game kept as unassigned, warned
/// - **Dangling relations**: dropped, warned
/// - **Base game missing from its family**: warned
///
/// A missing or unreadable file is an error.
///
/// # Returns
///
/// Returns `(catalog, warnings)`. Every warning is also logged at `warn`.
pub async fn load_catalog(
    paths: &DataPaths,
) -> Result<(Box<dyn CatalogStore>, Vec<LoadWarning>)> {
    let mut warnings = Vec::new();

    let mut families: Vec<Family> =
        load_records(&paths.families, DataFile::Families, Family::validate, &mut warnings).await?;
    let games: Vec<Game> =
        load_records(&paths.games, DataFile::Games, Game::validate, &mut warnings).await?;
    let relations: Vec<Relation> = load_records(
        &paths.relations,
        DataFile::Relations,
        Relation::validate,
        &mut warnings,
    )
    .await?;

    // Later family records replace earlier ones in place.
    let mut deduped: Vec<Family> = Vec::with_capacity(families.len());
    for family in families.drain(..) {
        match deduped.iter_mut().find(|f| f.id == family.id) {
            Some(existing) => {
                warnings.push(LoadWarning::DuplicateFamily {
                    family_id: family.id.clone(),
                });
                *existing = family;
            }
            None => deduped.push(family),
        }
    }
    let families = deduped;
    let family_ids: HashSet<&FamilyId> = families.iter().map(|f| &f.id).collect();

    let mut seen_games: HashSet<&GameId> = HashSet::with_capacity(games.len());
    for game in &games {
        if !seen_games.insert(&game.id) {
            warnings.push(LoadWarning::DuplicateGame {
                game_id: game.id.clone(),
            });
        }
        if let Some(family_id) = &game.family_id {
            if !family_ids.contains(family_id) {
                warnings.push(LoadWarning::UnknownFamily {
                    game_id: game.id.clone(),
                    family_id: family_id.clone(),
                });
            }
        }
    }

    let mut kept_relations = Vec::with_capacity(relations.len());
    for relation in relations {
        let missing = [&relation.source_game_id, &relation.target_game_id]
            .into_iter()
            .find(|id| !seen_games.contains(id))
            .cloned();
        match missing {
            Some(missing) => warnings.push(LoadWarning::DanglingRelation {
                source: relation.source_game_id.clone(),
                target: relation.target_game_id.clone(),
                missing,
            }),
            None => kept_relations.push(relation),
        }
    }

    for family in &families {
        let Some(base_game_id) = &family.base_game_id else {
            continue;
        };
        let in_family = games
            .iter()
            .any(|g| &g.id == base_game_id && g.family_id.as_ref() == Some(&family.id));
        if !in_family {
            warnings.push(LoadWarning::UnknownBaseGame {
                family_id: family.id.clone(),
                base_game_id: base_game_id.clone(),
            });
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "Catalog data problem");
    }
    tracing::debug!(
        families = families.len(),
        games = games.len(),
        relations = kept_relations.len(),
        warnings = warnings.len(),
        "Loaded catalog"
    );

    let catalog = Arc::new(Mutex::new(CatalogInner::new(
        families,
        games,
        kept_relations,
    )));
    Ok((Box::new(catalog), warnings))
}
