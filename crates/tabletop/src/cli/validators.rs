//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Maximum length of a family ID accepted on the command line
pub const MAX_FAMILY_ID_LENGTH: usize = 128;

/// Validate a catalog name.
///
/// Delegates to `commands::init` so both paths share one set of rules.
pub fn validate_catalog_name(s: &str) -> Result<String, String> {
    use crate::commands::init;

    let trimmed = s.trim();
    init::validate_catalog_name(trimmed).map_err(|e| e.to_string())?;
    Ok(trimmed.to_string())
}

/// Validate a family ID argument.
///
/// Family IDs come from catalog data, so only the shape is checked here:
/// non-empty, no inner whitespace, bounded length.
pub fn validate_family_id(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Family ID cannot be empty".to_string());
    }

    if s.len() > MAX_FAMILY_ID_LENGTH {
        return Err(format!(
            "Family ID cannot exceed {} characters, got {}",
            MAX_FAMILY_ID_LENGTH,
            s.len()
        ));
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Family ID '{}' cannot contain whitespace", s));
    }

    Ok(s.to_string())
}
