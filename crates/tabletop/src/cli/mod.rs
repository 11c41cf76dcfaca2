//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for tabletop using clap's derive API.
//! Each command has its own argument struct with validation and helpful error messages.
//!
//! # Commands
//!
//! - `init`: Initialize a new catalog
//! - `info`: Show data file locations and counts
//! - `families`: List families with their root and orphan count
//! - `orphans`: Show the orphan games of one family
//! - `tree`: Show a family as a tree from its root
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! tabletop init --name shelf
//! tabletop families --with-orphans --sort orphans
//! tabletop orphans catan
//! tabletop --json tree catan --depth 2
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{FamiliesArgs, InfoArgs, InitArgs, OrphansArgs, TreeArgs};
pub use types::FamilySortArg;
pub use validators::{validate_catalog_name, validate_family_id};

/// Tabletop - board-game family catalog tool
///
/// Checks game families for orphans: games that cannot be reached from the
/// family's base game by following expansion, sequel and similar relations.
/// Data lives in `.tabletop/*.jsonl` for easy version control integration.
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new catalog
    ///
    /// Creates the `.tabletop/` directory with configuration and empty data
    /// files. Run this once in your project root.
    Init(InitArgs),

    /// Show catalog information
    ///
    /// Displays data file paths and record counts.
    Info(InfoArgs),

    /// List families
    ///
    /// Shows every family with its game count, root game and orphan count.
    Families(FamiliesArgs),

    /// Show a family's orphan games
    ///
    /// Lists the games that cannot be reached from the family's root.
    Orphans(OrphansArgs),

    /// Show a family as a tree
    ///
    /// Draws the games reachable from the root, each under the game it was
    /// first reached from, then lists the orphans.
    Tree(TreeArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let load_app = || async { App::from_directory(&std::env::current_dir()?).await };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            Some(Commands::Info(args)) => {
                let app = load_app().await?;
                execute::execute_info(&app, args, output_mode).await
            }
            Some(Commands::Families(args)) => {
                let app = load_app().await?;
                execute::execute_families(&app, args, output_mode).await
            }
            Some(Commands::Orphans(args)) => {
                let app = load_app().await?;
                execute::execute_orphans(&app, args, output_mode).await
            }
            Some(Commands::Tree(args)) => {
                let app = load_app().await?;
                execute::execute_tree(&app, args, output_mode).await
            }
            None => {
                println!("Tabletop board-game family catalog");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
