//! Implementation of the `init` command.
//!
//! This module handles initialization of a new tabletop catalog, creating
//! the `.tabletop/` directory structure with configuration and empty data
//! files, and locating an existing catalog from a working directory.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default catalog name if none specified
pub const DEFAULT_CATALOG_NAME: &str = "catalog";

/// Name of the tabletop directory
pub const TABLETOP_DIR_NAME: &str = ".tabletop";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the games data file
pub const GAMES_FILE_NAME: &str = "games.jsonl";

/// Name of the families data file
pub const FAMILIES_FILE_NAME: &str = "families.jsonl";

/// Name of the relations data file
pub const RELATIONS_FILE_NAME: &str = "relations.jsonl";

/// Name of the gitignore file within .tabletop
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Minimum catalog name length
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum catalog name length
pub const MAX_NAME_LENGTH: usize = 40;

/// Maximum directory depth to traverse when searching for the catalog root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure for a tabletop catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabletopConfig {
    /// Human-readable catalog name
    #[serde(rename = "catalog-name")]
    pub catalog_name: String,

    /// Data file locations
    pub data: DataConfig,
}

/// Data file section, paths relative to the catalog root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// Games file
    pub games: String,

    /// Families file
    pub families: String,

    /// Relations file
    pub relations: String,
}

/// Resolved absolute locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Games file
    pub games: PathBuf,
    /// Families file
    pub families: PathBuf,
    /// Relations file
    pub relations: PathBuf,
}

impl DataConfig {
    /// Resolve the configured paths against the catalog root.
    pub fn resolve(&self, root_dir: &Path) -> DataPaths {
        DataPaths {
            games: root_dir.join(&self.games),
            families: root_dir.join(&self.families),
            relations: root_dir.join(&self.relations),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        let in_dir = |file: &str| format!("{}/{}", TABLETOP_DIR_NAME, file);
        Self {
            games: in_dir(GAMES_FILE_NAME),
            families: in_dir(FAMILIES_FILE_NAME),
            relations: in_dir(RELATIONS_FILE_NAME),
        }
    }
}

impl TabletopConfig {
    /// Create a new configuration with the given name and default data paths
    pub fn new(catalog_name: &str) -> Self {
        Self {
            catalog_name: catalog_name.to_string(),
            data: DataConfig::default(),
        }
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content).map_err(ConfigError::Yaml)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(ConfigError::Yaml)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for TabletopConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_NAME)
    }
}

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created tabletop directory
    pub tabletop_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Paths to the created data files
    pub data: DataPaths,
    /// Path to the created gitignore file
    pub gitignore_file: PathBuf,
    /// The catalog name
    pub catalog_name: String,
}

/// Validate a catalog name.
///
/// Requirements:
/// - 2-40 characters
/// - ASCII letters, digits, `-` and `_` only
///
/// Expects pre-trimmed input.
pub fn validate_catalog_name(name: &str) -> Result<()> {
    if name.len() < MIN_NAME_LENGTH {
        return Err(ConfigError::InvalidName(format!(
            "must be at least {} characters",
            MIN_NAME_LENGTH
        ))
        .into());
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ConfigError::InvalidName(format!(
            "cannot exceed {} characters",
            MAX_NAME_LENGTH
        ))
        .into());
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::InvalidName(
            "must contain only letters, digits, '-' or '_'".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Initialize a new tabletop catalog in the given directory.
///
/// # Errors
///
/// Returns an error if:
/// - The `.tabletop/` directory already exists
/// - The name is invalid
/// - File system operations fail
pub async fn init(base_dir: &Path, name: Option<&str>) -> Result<InitResult> {
    let name = name.unwrap_or(DEFAULT_CATALOG_NAME).trim();
    validate_catalog_name(name)?;

    let tabletop_dir = base_dir.join(TABLETOP_DIR_NAME);
    if is_initialized(base_dir) {
        return Err(ConfigError::AlreadyInitialized(TABLETOP_DIR_NAME.to_string()).into());
    }

    fs::create_dir_all(&tabletop_dir).await?;

    let config_file = tabletop_dir.join(CONFIG_FILE_NAME);
    let config = TabletopConfig::new(name);
    config.save(&config_file).await?;

    let data = config.data.resolve(base_dir);
    for path in [&data.games, &data.families, &data.relations] {
        fs::write(path, "").await?;
    }

    let gitignore_file = tabletop_dir.join(GITIGNORE_FILE_NAME);
    let gitignore_content = "\
# Tabletop scratch files that should not be tracked
# The .jsonl data files should be tracked
*.tmp
";
    fs::write(&gitignore_file, gitignore_content).await?;

    tracing::debug!(dir = %tabletop_dir.display(), name, "Initialized catalog");

    Ok(InitResult {
        tabletop_dir,
        config_file,
        data,
        gitignore_file,
        catalog_name: name.to_string(),
    })
}

/// Check if a directory has been initialized with tabletop.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(TABLETOP_DIR_NAME).exists()
}

/// Find the catalog root by searching up the directory tree.
///
/// Returns the directory containing `.tabletop/`, or `None` if none is found
/// before the filesystem root or the depth limit.
pub fn find_tabletop_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if is_initialized(&current) {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
