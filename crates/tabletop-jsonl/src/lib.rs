//! Resilient JSONL (JSON Lines) reading for tabletop catalog snapshots.
//!
//! Catalog data (games, families, relations) is exported one JSON object
//! per line. This crate reads those files asynchronously, skipping lines
//! that cannot be decoded and reporting them as [`Warning`]s instead of
//! failing the whole load.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use reader::JsonlReader;
pub use warning::{Warning, WarningCollector};

use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs::File;

/// Reads every decodable record from a JSONL file.
///
/// Malformed lines are skipped and returned as warnings alongside the
/// records that did decode. Blank lines are ignored silently. Record order
/// follows file order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened. Problems with
/// individual lines never produce an error.
///
/// # Examples
///
/// ```no_run
/// use serde::Deserialize;
/// use tabletop_jsonl::read_jsonl_resilient;
///
/// #[derive(Deserialize)]
/// struct Game {
///     id: String,
///     name: String,
/// }
///
/// # async fn example() -> tabletop_jsonl::Result<()> {
/// let (games, warnings) = read_jsonl_resilient::<Game, _>(".tabletop/games.jsonl").await?;
/// for warning in &warnings {
///     eprintln!("{warning}");
/// }
/// println!("loaded {} games", games.len());
/// # Ok(())
/// # }
/// ```
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).await?;
    let reader = JsonlReader::new(file);
    let (stream, collector) = reader.stream_resilient::<T>();

    let records: Vec<T> = std::pin::pin!(stream).collect().await;
    let warnings = collector.into_warnings();

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        warnings = warnings.len(),
        "Read JSONL file"
    );

    Ok((records, warnings))
}
