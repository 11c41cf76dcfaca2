//! Family relation analysis.
//!
//! A family groups related games (a franchise or series). Its games are
//! linked by directional relations such as "B is an expansion of A". This
//! module finds which games of a family cannot be reached from the family's
//! base game by following those relations from parent to child: the
//! **orphans**.
//!
//! # Pipeline
//!
//! 1. [`root::select_root`] picks the root: the explicit base game if it is
//!    part of the family, else the oldest game (missing years last), ties
//!    going to the shorter name.
//! 2. [`graph::RelationGraph::build`] turns the relation list into a
//!    parent -> child graph, dropping relations with an endpoint outside the
//!    family.
//! 3. [`traversal::traverse`] runs a breadth-first search from the root.
//! 4. [`orphans::orphan_games`] returns every game the search did not reach,
//!    in input order.
//!
//! [`analysis::analyze`] runs the whole pipeline once and keeps the
//! intermediate results for reporting, and [`tree::FamilyTree`] renders the
//! search as a spanning tree.
//!
//! # Edge Direction Convention
//!
//! A relation reads "source is a `relation_type` of target", so the target
//! is the parent. Graph edges therefore point **target -> source**, and the
//! search only ever follows them in that direction. A sequel does not make
//! its predecessor reachable.
//!
//! # Purity
//!
//! Every function here is synchronous and works only on its arguments. No
//! input shape makes them fail: missing base games, empty families,
//! dangling or duplicate relations and cycles are all normalized.
//!
//! # Example
//!
//! ```
//! use tabletop::domain::{Game, GameId, Relation, RelationType};
//! use tabletop::family::{orphan_count, orphan_games};
//!
//! let games = vec![
//!     Game::new("catan", "Catan", Some(1995)),
//!     Game::new("seafarers", "Catan: Seafarers", Some(1997)),
//!     Game::new("starfarers", "Starfarers of Catan", Some(1999)),
//! ];
//! let relations = vec![Relation::new("seafarers", "catan", RelationType::ExpansionOf)];
//!
//! let orphans = orphan_games(&games, &relations, None);
//! assert_eq!(orphans.len(), 1);
//! assert_eq!(orphans[0].id, GameId::new("starfarers"));
//! assert_eq!(orphan_count(&games, &relations, None), 1);
//! ```

pub mod analysis;
pub mod graph;
pub mod orphans;
pub mod root;
pub mod traversal;
pub mod tree;

pub use analysis::{analyze, FamilyAnalysis};
pub use graph::RelationGraph;
pub use orphans::{orphan_count, orphan_games};
pub use root::{select_root, RootReason, RootSelection};
pub use traversal::{traverse, Reachability, Visit};
pub use tree::{FamilyTree, TreeNode};
