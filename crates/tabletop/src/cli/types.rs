//! CLI value enums.

use clap::ValueEnum;

use crate::output::FamilySummary;

/// Sort order for the `families` listing
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilySortArg {
    /// Catalog file order
    #[default]
    Catalog,
    /// Family name, case-insensitive
    Name,
    /// Most orphans first
    Orphans,
}

impl FamilySortArg {
    /// Sort summaries in place. Sorting is stable, so ties keep catalog order.
    pub fn sort(self, families: &mut [FamilySummary]) {
        match self {
            Self::Catalog => {}
            Self::Name => families.sort_by_key(|f| f.name.to_lowercase()),
            Self::Orphans => families.sort_by(|a, b| b.orphans.cmp(&a.orphans)),
        }
    }
}

impl std::fmt::Display for FamilySortArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Name => write!(f, "name"),
            Self::Orphans => write!(f, "orphans"),
        }
    }
}
