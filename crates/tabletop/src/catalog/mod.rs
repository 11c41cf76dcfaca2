//! Catalog access layer for tabletop.
//!
//! A catalog is a read-only snapshot of families, games and the relations
//! between games. Commands read it through the [`CatalogStore`] trait and
//! hand per-family snapshots to the pure analysis in [`crate::family`].
//!
//! # Architecture
//!
//! The trait is async so a backend may do I/O per query. It is object-safe,
//! allowing dynamic dispatch via `Box<dyn CatalogStore>`. The only backend
//! today is [`in_memory`], loaded from JSONL files.
//!
//! # Example
//!
//! ```no_run
//! use tabletop::catalog::CatalogStore;
//! use tabletop::catalog::in_memory::load_catalog;
//! use tabletop::commands::init::DataConfig;
//! use tabletop::domain::FamilyId;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let paths = DataConfig::default().resolve(Path::new("."));
//!     let (catalog, warnings) = load_catalog(&paths).await?;
//!     for warning in &warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     let snapshot = catalog.snapshot(&FamilyId::new("catan")).await?;
//!     println!("{} games", snapshot.games.len());
//!     Ok(())
//! }
//! ```

use crate::domain::{Family, FamilyId, Game, GameId, Relation};
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

pub mod in_memory;

/// Totals over a whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    /// Number of families
    pub families: usize,
    /// Number of game records
    pub games: usize,
    /// Number of relation records
    pub relations: usize,
    /// Games that belong to no known family
    pub unassigned_games: usize,
}

/// Everything the family analysis needs for one family, detached from the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySnapshot {
    /// The family record
    pub family: Family,
    /// Its games, in catalog order
    pub games: Vec<Game>,
    /// Relations with at least one endpoint among `games`, in catalog order
    pub relations: Vec<Relation>,
}

/// Read interface over a game catalog.
///
/// Implementations must be `Send + Sync` to support concurrent access in
/// async contexts. Lists are returned in catalog (file) order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All families.
    async fn families(&self) -> Result<Vec<Family>>;

    /// A family by ID, or `None` if unknown.
    async fn family(&self, id: &FamilyId) -> Result<Option<Family>>;

    /// A game by ID, or `None` if unknown. With duplicate IDs the last
    /// record wins.
    async fn game(&self, id: &GameId) -> Result<Option<Game>>;

    /// Games of a family.
    ///
    /// # Errors
    ///
    /// Returns `Error::FamilyNotFound` if the family doesn't exist.
    async fn games_in_family(&self, id: &FamilyId) -> Result<Vec<Game>>;

    /// Games whose family is missing or unknown.
    async fn unassigned_games(&self) -> Result<Vec<Game>>;

    /// All relations.
    async fn relations(&self) -> Result<Vec<Relation>>;

    /// Catalog totals.
    async fn counts(&self) -> Result<CatalogCounts>;

    /// A family with its games and the relations touching them.
    ///
    /// # Errors
    ///
    /// Returns `Error::FamilyNotFound` if the family doesn't exist.
    async fn snapshot(&self, id: &FamilyId) -> Result<FamilySnapshot>;
}
