//! In-memory catalog backend.
//!
//! All records are held in RAM for the life of the process. The catalog is
//! built once, usually by [`load_catalog`] from the three JSONL data files,
//! and only read afterwards.
//!
//! # Architecture
//!
//! - `Vec`s of families, games and relations keep file order
//! - `HashMap` indexes give O(1) lookup by ID and per-family game lists
//!
//! # Thread Safety
//!
//! The catalog is wrapped in `Arc<Mutex<CatalogInner>>`. Queries copy what
//! they need out of the lock, so analyses run without holding it.

mod inner;
mod jsonl;
mod trait_impl;

use crate::catalog::CatalogStore;
use crate::domain::{Family, Game, Relation};
use inner::CatalogInner;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use jsonl::{load_catalog, DataFile, LoadWarning};

/// Thread-safe in-memory catalog.
///
/// Implements [`CatalogStore`] in `trait_impl.rs`.
pub(crate) type InMemoryCatalog = Arc<Mutex<CatalogInner>>;

/// Build an in-memory catalog from records that are already loaded.
///
/// Records are taken as-is; use [`load_catalog`] for validation and
/// data-quality warnings.
///
/// # Example
///
/// ```
/// use tabletop::catalog::CatalogStore;
/// use tabletop::catalog::in_memory::new_in_memory_catalog;
/// use tabletop::domain::{Family, Game};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let catalog = new_in_memory_catalog(
///         vec![Family::new("catan", "Catan", None)],
///         vec![Game::new("g1", "Catan", Some(1995)).in_family("catan")],
///         vec![],
///     );
///     let counts = catalog.counts().await.unwrap();
///     assert_eq!(counts.games, 1);
/// }
/// ```
pub fn new_in_memory_catalog(
    families: Vec<Family>,
    games: Vec<Game>,
    relations: Vec<Relation>,
) -> Box<dyn CatalogStore> {
    Box::new(Arc::new(Mutex::new(CatalogInner::new(
        families, games, relations,
    ))))
}
