//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that locates a catalog, loads it,
//! and gives commands a single place to query families from.
//!
//! # Example
//!
//! ```no_run
//! use tabletop::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     println!("{} load warnings", app.warnings().len());
//!     Ok(())
//! }
//! ```

use crate::catalog::in_memory::{load_catalog, LoadWarning};
use crate::catalog::{CatalogStore, FamilySnapshot};
use crate::commands::init::{
    find_tabletop_root, DataPaths, TabletopConfig, CONFIG_FILE_NAME, TABLETOP_DIR_NAME,
};
use crate::domain::FamilyId;
use crate::error::{ConfigError, Result};
use crate::family::{analyze, FamilyAnalysis};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
///
/// Holds the loaded catalog and the configuration it came from. The catalog
/// is read once on creation.
pub struct App {
    /// The catalog backend
    catalog: Box<dyn CatalogStore>,

    /// Path to the tabletop directory (.tabletop)
    tabletop_dir: PathBuf,

    /// Loaded configuration
    config: TabletopConfig,

    /// Resolved data file paths
    data: DataPaths,

    /// Data quality warnings from loading
    warnings: Vec<LoadWarning>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("tabletop_dir", &self.tabletop_dir)
            .field("catalog_name", &self.config.catalog_name)
            .field("warnings", &self.warnings.len())
            .field("catalog", &"<dyn CatalogStore>")
            .finish()
    }
}

/// A family snapshot together with its analysis.
#[derive(Debug, Clone)]
pub struct FamilyReport {
    /// The data the analysis ran on
    pub snapshot: FamilySnapshot,
    /// The analysis result
    pub analysis: FamilyAnalysis,
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree for a `.tabletop/` directory, loads the
    /// configuration and then the catalog data files.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No catalog is found in the directory tree
    /// - Configuration cannot be loaded
    /// - A data file cannot be read
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_tabletop_root(working_dir).ok_or(ConfigError::NotInitialized)?;

        let tabletop_dir = root_dir.join(TABLETOP_DIR_NAME);
        let config = TabletopConfig::load(&tabletop_dir.join(CONFIG_FILE_NAME)).await?;
        let data = config.data.resolve(&root_dir);

        let (catalog, warnings) = load_catalog(&data).await?;

        Ok(Self {
            catalog,
            tabletop_dir,
            config,
            data,
            warnings,
        })
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    /// Get the configuration.
    pub fn config(&self) -> &TabletopConfig {
        &self.config
    }

    /// Get the resolved data file paths.
    pub fn data_paths(&self) -> &DataPaths {
        &self.data
    }

    /// Get the path to the tabletop directory.
    pub fn tabletop_dir(&self) -> &Path {
        &self.tabletop_dir
    }

    /// Warnings collected while loading the catalog.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Snapshot a family and analyze it.
    ///
    /// # Errors
    ///
    /// Returns `Error::FamilyNotFound` if the family doesn't exist.
    pub async fn family_report(&self, id: &FamilyId) -> Result<FamilyReport> {
        let snapshot = self.catalog.snapshot(id).await?;
        let analysis = analyze(
            &snapshot.games,
            &snapshot.relations,
            snapshot.family.base_game_id.as_ref(),
        );
        Ok(FamilyReport { snapshot, analysis })
    }

    /// Analyze every family, in catalog order.
    pub async fn all_family_reports(&self) -> Result<Vec<FamilyReport>> {
        let mut reports = Vec::new();
        for family in self.catalog.families().await? {
            reports.push(self.family_report(&family.id).await?);
        }
        Ok(reports)
    }
}
