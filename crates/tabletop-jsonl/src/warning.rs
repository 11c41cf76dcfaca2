//! Non-fatal problems found while reading JSONL.
//!
//! A catalog export can contain the odd broken line (a hand edit, a
//! truncated write). The resilient reader records a [`Warning`] for each line
//! it drops and keeps going; a [`WarningCollector`] gathers them while the
//! stream is consumed.
//!
//! ```
//! use tabletop_jsonl::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::MalformedJson {
//!     line_number: 5,
//!     error: "unexpected end of input".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings[0].line_number(), 5);
//! assert_eq!(warnings[0].to_string(), "line 5: malformed JSON: unexpected end of input");
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A dropped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Not valid JSON, or not the expected record shape.
    MalformedJson {
        /// 1-based line number
        line_number: usize,
        /// Decoder message
        error: String,
    },

    /// Not readable as text (bad encoding, I/O failure mid-file).
    SkippedLine {
        /// 1-based line number
        line_number: usize,
        /// Why it was dropped
        reason: String,
    },
}

impl Warning {
    /// 1-based line the warning refers to.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Stable tag for grouping warnings in reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson { .. } => "malformed_json",
            Self::SkippedLine { .. } => "skipped_line",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {}: malformed JSON: {}", line_number, error)
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => write!(f, "line {}: skipped: {}", line_number, reason),
        }
    }
}

impl std::error::Error for Warning {}

/// Shared warning list.
///
/// Clones share one list: the stream holds a handle while the caller keeps
/// another. A poisoned lock is recovered, since a `Vec` push cannot leave it
/// half-written.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Warning>> {
        self.warnings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a warning.
    pub fn add(&self, warning: Warning) {
        self.lock().push(warning);
    }

    /// Number of warnings so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Take the warnings, copying them out if other handles are still alive.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        match Arc::try_unwrap(self.warnings) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::malformed(
        Warning::MalformedJson { line_number: 42, error: "expected value".to_string() },
        42,
        "malformed_json",
        "line 42: malformed JSON: expected value"
    )]
    #[case::skipped(
        Warning::SkippedLine { line_number: 7, reason: "invalid UTF-8".to_string() },
        7,
        "skipped_line",
        "line 7: skipped: invalid UTF-8"
    )]
    fn warning_accessors(
        #[case] warning: Warning,
        #[case] line: usize,
        #[case] kind: &str,
        #[case] text: &str,
    ) {
        assert_eq!(warning.line_number(), line);
        assert_eq!(warning.kind(), kind);
        assert_eq!(warning.to_string(), text);
    }

    #[test]
    fn clones_share_one_list() {
        let collector = WarningCollector::new();
        let handle = collector.clone();
        assert!(collector.is_empty());

        handle.add(Warning::SkippedLine {
            line_number: 3,
            reason: "bad bytes".to_string(),
        });

        assert_eq!(collector.len(), 1);
        assert_eq!(collector.warnings()[0].line_number(), 3);
    }

    #[test]
    fn into_warnings_copies_while_shared() {
        let collector = WarningCollector::new();
        let handle = collector.clone();
        collector.add(Warning::MalformedJson {
            line_number: 1,
            error: "eof".to_string(),
        });

        assert_eq!(collector.into_warnings().len(), 1);
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let collector = WarningCollector::new();
        let handle = collector.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.warnings.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        collector.add(Warning::SkippedLine {
            line_number: 9,
            reason: "after poison".to_string(),
        });
        assert_eq!(collector.into_warnings().len(), 1);
    }
}
