//! Domain types for the board-game catalog.
//!
//! Games, families and the directional relations between games. These are
//! read-only snapshot records: the catalog loads them from JSONL exports and
//! the family analysis consumes them without mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a game
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Create a new game ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GameId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a game family
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(pub String);

impl FamilyId {
    /// Create a new family ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FamilyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FamilyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A published game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier
    pub id: GameId,

    /// Display name, including any subtitle
    pub name: String,

    /// Year of first publication, if known
    #[serde(default)]
    pub year_published: Option<i32>,

    /// Family this game belongs to (at most one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<FamilyId>,
}

impl Game {
    /// Create a game that belongs to no family
    pub fn new(id: impl Into<GameId>, name: impl Into<String>, year_published: Option<i32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year_published,
            family_id: None,
        }
    }

    /// Assign the game to a family
    #[must_use]
    pub fn in_family(mut self, family_id: impl Into<FamilyId>) -> Self {
        self.family_id = Some(family_id.into());
        self
    }

    /// Check the record is usable: non-blank ID and name.
    pub fn validate(&self) -> Result<(), String> {
        require_id("Game ID", self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err(format!("Game {} has an empty name", self.id));
        }
        Ok(())
    }
}

/// Reject blank or whitespace-padded identifiers.
fn require_id(what: &str, id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err(format!("{} cannot be empty", what));
    }
    if id.trim() != id {
        return Err(format!("{} '{}' has surrounding whitespace", what, id));
    }
    Ok(())
}

/// A named grouping of related games, such as a franchise or series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique identifier
    pub id: FamilyId,

    /// Display name
    pub name: String,

    /// Designated base game, the entry point of the family's relation graph
    #[serde(default)]
    pub base_game_id: Option<GameId>,
}

impl Family {
    /// Create a family
    pub fn new(id: impl Into<FamilyId>, name: impl Into<String>, base_game_id: Option<GameId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_game_id,
        }
    }

    /// Check the record is usable: non-blank ID.
    pub fn validate(&self) -> Result<(), String> {
        require_id("Family ID", self.id.as_str())
    }
}

/// Kind of derivation a relation describes.
///
/// Serialized as the bare snake_case tag. Tags this build does not know are
/// kept verbatim in [`RelationType::Other`] so newer exports still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    /// Source is an expansion of target
    ExpansionOf,

    /// Source is a standalone expansion of target
    StandaloneExpansionOf,

    /// Source is a reimplementation (new edition, rework) of target
    ReimplementationOf,

    /// Source is a sequel to target
    SequelTo,

    /// Source is a spin-off of target
    SpinOffOf,

    /// Any other tag
    Other(String),
}

impl RelationType {
    /// The wire tag for this relation type
    pub fn as_str(&self) -> &str {
        match self {
            Self::ExpansionOf => "expansion_of",
            Self::StandaloneExpansionOf => "standalone_expansion_of",
            Self::ReimplementationOf => "reimplementation_of",
            Self::SequelTo => "sequel_to",
            Self::SpinOffOf => "spin_off_of",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for RelationType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "expansion_of" => Self::ExpansionOf,
            "standalone_expansion_of" => Self::StandaloneExpansionOf,
            "reimplementation_of" => Self::ReimplementationOf,
            "sequel_to" => Self::SequelTo,
            "spin_off_of" => Self::SpinOffOf,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for RelationType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<RelationType> for String {
    fn from(relation_type: RelationType) -> Self {
        match relation_type {
            RelationType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directional link between two games.
///
/// Reads as "source is a `relation_type` of target": the target is the
/// parent (the earlier or base title) and the source the derived child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// The derived game
    pub source_game_id: GameId,

    /// The game it derives from
    pub target_game_id: GameId,

    /// Kind of derivation
    pub relation_type: RelationType,
}

impl Relation {
    /// Create a relation: `source` is a `relation_type` of `target`
    pub fn new(
        source: impl Into<GameId>,
        target: impl Into<GameId>,
        relation_type: RelationType,
    ) -> Self {
        Self {
            source_game_id: source.into(),
            target_game_id: target.into(),
            relation_type,
        }
    }

    /// Check the record is usable: both endpoints set.
    pub fn validate(&self) -> Result<(), String> {
        require_id("Relation source", self.source_game_id.as_str())?;
        require_id("Relation target", self.target_game_id.as_str())?;
        if self.relation_type.as_str().is_empty() {
            return Err("Relation type cannot be empty".to_string());
        }
        Ok(())
    }
}
