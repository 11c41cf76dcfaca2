//! CLI argument structs for all commands.

use clap::Parser;

use super::types::FamilySortArg;
use super::validators::{validate_catalog_name, validate_family_id};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Catalog name
    ///
    /// 2-40 characters: letters, digits, '-' or '_'.
    #[arg(short, long, value_parser = validate_catalog_name)]
    pub name: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}

/// Arguments for the `families` command
#[derive(Parser, Debug, Clone)]
pub struct FamiliesArgs {
    /// Only list families that have orphans
    #[arg(long)]
    pub with_orphans: bool,

    /// Sort order
    #[arg(long, value_enum, default_value_t = FamilySortArg::Catalog)]
    pub sort: FamilySortArg,
}

/// Arguments for the `orphans` command
#[derive(Parser, Debug, Clone)]
pub struct OrphansArgs {
    /// Family to check
    #[arg(value_parser = validate_family_id)]
    pub family_id: String,
}

/// Arguments for the `tree` command
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Family to display
    #[arg(value_parser = validate_family_id)]
    pub family_id: String,

    /// Maximum depth below the root (0 shows only the root)
    #[arg(short, long)]
    pub depth: Option<usize>,
}
