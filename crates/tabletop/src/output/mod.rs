//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - `color`: Color and styling helpers (semantic colors, icons)
//! - [`tree`]: Family tree rendering with ASCII/Unicode connectors

mod color;
pub mod tree;

use crate::app::FamilyReport;
use crate::domain::{Family, FamilyId, Game, GameId};
use crate::error::CatalogError;
use crate::family::RootReason;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use tree::print_family_tree;

use color::{
    bold, colorize_id, colorize_orphan_count, colorize_root_reason, dimmed, format_year,
    orphan_icon,
};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Configuration for output formatting.
///
/// Controls the maximum content width, ASCII fallback for icons and tree
/// connectors, and whether colors are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons and connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `TABLETOP_MAX_WIDTH`: Maximum content width (default: 100)
    /// - `TABLETOP_ASCII`: "1" or "true" for ASCII-only output (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `TABLETOP_COLOR`: "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let max_width = match env::var("TABLETOP_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "TABLETOP_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match env::var("TABLETOP_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "TABLETOP_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // NO_COLOR (https://no-color.org/) wins over TABLETOP_COLOR.
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("TABLETOP_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Usable width: the terminal width capped at `max_width`.
    pub fn content_width(&self) -> usize {
        get_terminal_width().min(self.max_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Wrap text to `max_width`, keeping blank lines.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width.max(10))
                    .into_iter()
                    .map(|s| s.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Report Views
// ============================================================================

/// One line of the `families` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    /// Family ID
    pub id: FamilyId,
    /// Family name
    pub name: String,
    /// Number of game records in the family
    pub games: usize,
    /// Root game, if the family has games
    pub root: Option<GameId>,
    /// Why the root was chosen
    pub root_reason: Option<RootReason>,
    /// Game records reachable from the root
    pub reachable: usize,
    /// Orphan game records; `reachable + orphans == games`
    pub orphans: usize,
}

impl FamilySummary {
    /// Summarize an analyzed family.
    pub fn from_report(report: &FamilyReport) -> Self {
        let analysis = &report.analysis;
        Self {
            id: report.snapshot.family.id.clone(),
            name: report.snapshot.family.name.clone(),
            games: analysis.games().len(),
            root: analysis.root().map(|g| g.id.clone()),
            root_reason: analysis.root_reason(),
            reachable: analysis.reachable_count(),
            orphans: analysis.orphan_count(),
        }
    }
}

/// Full orphan report for one family.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanReport<'a> {
    /// The family
    pub family: &'a Family,
    /// Root game
    pub root: Option<&'a Game>,
    /// Why the root was chosen
    pub root_reason: Option<RootReason>,
    /// Number of game records in the family
    pub games: usize,
    /// Game records reachable from the root; `reachable + orphans.len() == games`
    pub reachable: usize,
    /// Relations ignored because one endpoint is outside the family
    pub skipped_relations: usize,
    /// Orphan games, in catalog order
    pub orphans: Vec<&'a Game>,
}

impl<'a> OrphanReport<'a> {
    /// Build the report view of an analyzed family.
    pub fn from_report(report: &'a FamilyReport) -> Self {
        let analysis = &report.analysis;
        Self {
            family: &report.snapshot.family,
            root: analysis.root(),
            root_reason: analysis.root_reason(),
            games: analysis.games().len(),
            reachable: analysis.reachable_count(),
            skipped_relations: analysis.skipped_relations(),
            orphans: analysis.orphans(),
        }
    }
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print data as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> crate::error::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(CatalogError::Serialization)?;
    writeln!(w, "{}", json)?;
    Ok(())
}

/// Print the family listing in the specified format.
pub fn print_families(families: &[FamilySummary], mode: OutputMode) -> crate::error::Result<()> {
    match mode {
        OutputMode::Json => print_json(&families),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();
            write_families_text(&mut handle, families, &config)?;
            Ok(())
        }
    }
}

/// Print one family's orphan report in the specified format.
pub fn print_orphans(report: &OrphanReport<'_>, mode: OutputMode) -> crate::error::Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();
            write_orphans_text(&mut handle, report, &config)?;
            Ok(())
        }
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

fn game_line(game: &Game, config: &OutputConfig) -> String {
    format!(
        "{} {} [{}]",
        colorize_id(game.id.as_str(), config),
        game.name,
        format_year(game.year_published, config)
    )
}

fn write_families_text<W: Write>(
    w: &mut W,
    families: &[FamilySummary],
    config: &OutputConfig,
) -> io::Result<()> {
    if families.is_empty() {
        return writeln!(w, "No families found.");
    }

    writeln!(w, "{}", bold(&format!("Families ({})", families.len()), config))?;
    for family in families {
        writeln!(w)?;
        writeln!(
            w,
            "{} {}",
            colorize_id(family.id.as_str(), config),
            family.name
        )?;
        let root = match (&family.root, family.root_reason) {
            (Some(root), Some(reason)) => format!(
                "{} ({})",
                colorize_id(root.as_str(), config),
                colorize_root_reason(reason, config)
            ),
            _ => dimmed("none", config),
        };
        writeln!(
            w,
            "  {} {}  {} {}  {} {}",
            dimmed("games:", config),
            family.games,
            dimmed("root:", config),
            root,
            dimmed("orphans:", config),
            colorize_orphan_count(family.orphans, config)
        )?;
    }
    Ok(())
}

fn write_orphans_text<W: Write>(
    w: &mut W,
    report: &OrphanReport<'_>,
    config: &OutputConfig,
) -> io::Result<()> {
    let width = config.content_width();

    writeln!(
        w,
        "{} {} ({})",
        bold("Family:", config),
        colorize_id(report.family.id.as_str(), config),
        report.family.name
    )?;

    let Some(root) = report.root else {
        return writeln!(w, "Family has no games.");
    };
    let reason = report
        .root_reason
        .map(|r| format!(" ({})", colorize_root_reason(r, config)))
        .unwrap_or_default();
    writeln!(w, "{}   {}{}", bold("Root:", config), game_line(root, config), reason)?;
    writeln!(
        w,
        "{} {} of {} games",
        dimmed("Reachable:", config),
        report.reachable,
        report.games
    )?;
    if report.skipped_relations > 0 {
        writeln!(
            w,
            "{} {}",
            dimmed("Cross-family relations ignored:", config),
            report.skipped_relations
        )?;
    }

    writeln!(w)?;
    if report.orphans.is_empty() {
        return writeln!(w, "{}", color::success("No orphans found.", config));
    }

    writeln!(
        w,
        "{}",
        bold(&format!("Orphans ({}):", report.orphans.len()), config)
    )?;
    for game in &report.orphans {
        let line = format!("{} {}", orphan_icon(config), game_line(game, config));
        for (i, part) in wrap_text(&line, width.saturating_sub(2)).iter().enumerate() {
            let indent = if i == 0 { "  " } else { "    " };
            writeln!(w, "{indent}{part}")?;
        }
    }
    Ok(())
}
