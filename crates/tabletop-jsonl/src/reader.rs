//! JSONL reading operations.
//!
//! This module provides async functionality for reading JSONL files line-by-line
//! with efficient buffering and line number tracking for error reporting.

use crate::warning::{Warning, WarningCollector};
use crate::{Error, Result};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// A raw line pulled from the underlying reader, before decoding.
enum RawLine {
    /// A line with content, trimmed of surrounding whitespace.
    Content(String),
    /// A line that was empty or whitespace-only.
    Blank,
    /// A line whose bytes were not valid UTF-8.
    NotUtf8(String),
}

/// Async reader for JSONL (JSON Lines) data.
///
/// `JsonlReader` wraps an async reader and provides buffered reading of JSONL
/// formatted data. It tracks line numbers so that decoding problems can be
/// reported against the line they occurred on.
///
/// # Examples
///
/// ```no_run
/// use tabletop_jsonl::reader::JsonlReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("games.jsonl").await?;
/// let mut reader = JsonlReader::new(file);
/// while let Some(value) = reader.read_line::<serde_json::Value>().await? {
///     println!("line {}: {value}", reader.line_number());
/// }
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    /// Buffered reader wrapping the underlying async reader.
    reader: BufReader<R>,
    /// Number of lines consumed so far (1-based once reading starts).
    line_number: usize,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read. After reading, returns the
    /// 1-based line number of the last line consumed.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consumes the reader, returning the underlying buffered reader.
    #[must_use]
    pub fn into_inner(self) -> BufReader<R> {
        self.reader
    }

    /// Reads and decodes the next non-blank line.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Unlike [`stream_resilient`](Self::stream_resilient), this is strict:
    /// a line that is not valid UTF-8 yields [`Error::InvalidFormat`] and a
    /// line that does not decode as `T` yields [`Error::Json`].
    pub async fn read_line<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        loop {
            match self.next_raw_line().await? {
                None => return Ok(None),
                Some(RawLine::Blank) => {}
                Some(RawLine::NotUtf8(reason)) => {
                    return Err(Error::InvalidFormat(format!(
                        "line {}: {}",
                        self.line_number, reason
                    )));
                }
                Some(RawLine::Content(line)) => return Ok(Some(serde_json::from_str(&line)?)),
            }
        }
    }

    /// Converts the reader into a stream that skips undecodable lines.
    ///
    /// Every line that fails to decode is recorded in the returned
    /// [`WarningCollector`] and the stream moves on to the next line. Blank
    /// lines are skipped without a warning. An I/O error ends the stream and
    /// is recorded as a [`Warning::SkippedLine`].
    pub fn stream_resilient<T: DeserializeOwned>(self) -> (impl Stream<Item = T>, WarningCollector) {
        let collector = WarningCollector::new();
        let state = (self, collector.clone());

        let stream = stream::unfold(state, |(mut reader, warnings)| async move {
            loop {
                let raw = match reader.next_raw_line().await {
                    Ok(Some(raw)) => raw,
                    Ok(None) => return None,
                    Err(e) => {
                        warnings.add(Warning::SkippedLine {
                            line_number: reader.line_number + 1,
                            reason: format!("read failed: {e}"),
                        });
                        return None;
                    }
                };

                match raw {
                    RawLine::Blank => {}
                    RawLine::NotUtf8(reason) => {
                        warnings.add(Warning::SkippedLine {
                            line_number: reader.line_number,
                            reason,
                        });
                    }
                    RawLine::Content(line) => match serde_json::from_str::<T>(&line) {
                        Ok(value) => return Some((value, (reader, warnings))),
                        Err(e) => {
                            tracing::trace!(line_number = reader.line_number, error = %e, "Skipping malformed JSONL line");
                            warnings.add(Warning::MalformedJson {
                                line_number: reader.line_number,
                                error: e.to_string(),
                            });
                        }
                    },
                }
            }
        });

        (stream, collector)
    }

    /// Pulls the next line off the reader, counting it.
    async fn next_raw_line(&mut self) -> Result<Option<RawLine>> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let raw = match String::from_utf8(buf) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    RawLine::Blank
                } else {
                    RawLine::Content(trimmed.to_string())
                }
            }
            Err(e) => RawLine::NotUtf8(format!("invalid UTF-8: {e}")),
        };
        Ok(Some(raw))
    }
}
