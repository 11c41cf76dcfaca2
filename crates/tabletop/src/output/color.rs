//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:   green   (reachable games, families without orphans)
//!   - Warning:   yellow  (orphans, fallback roots, load warnings)
//!   - Error:     red     (orphan counts above zero)
//!   - Info:      cyan    (game and family IDs, root tree node)
//!   - Muted:     dimmed  (relation tags, connectors, years)
//!   - Emphasis:  bold    (section headers)

use crate::family::RootReason;
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub(crate) fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub(crate) fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub(crate) fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub(crate) fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Colorize a game or family ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    info(id, config)
}

/// Format a publication year, `????` when unknown, dimmed.
pub(crate) fn format_year(year: Option<i32>, config: &OutputConfig) -> String {
    let text = year.map_or_else(|| "????".to_string(), |y| y.to_string());
    dimmed(&text, config)
}

/// Colorize an orphan count: green for zero, red otherwise.
pub(crate) fn colorize_orphan_count(count: usize, config: &OutputConfig) -> String {
    let text = count.to_string();
    if count == 0 {
        success(&text, config)
    } else {
        error(&text, config)
    }
}

/// Describe why a root was chosen. Fallback roots are highlighted.
pub(crate) fn colorize_root_reason(reason: RootReason, config: &OutputConfig) -> String {
    let text = reason.to_string();
    match reason {
        RootReason::Explicit | RootReason::OldestPublished => dimmed(&text, config),
        RootReason::BaseGameMissing => warning(&text, config),
    }
}

/// Marker printed before an orphan game, with ASCII fallback.
pub(crate) fn orphan_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "!" } else { "⚠" };
    warning(icon, config)
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
