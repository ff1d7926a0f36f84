//! CSV projection of enriched entries and the randomly named output file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::RngCore;
use serde::Serialize;

use crate::types::{EnrichedBeerEntry, RatingsError, RatingsResult};

/// Output columns, in order.
pub const COLUMNS: [&str; 7] = [
    "brewery",
    "name",
    "day",
    "abv",
    "style",
    "untappd_rating",
    "untappd_href",
];

/// Bytes of randomness in an output filename (hex-encoded to 24 chars).
pub const FILENAME_RANDOM_BYTES: usize = 12;

/// One CSV data row. Field order must match [`COLUMNS`].
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    brewery: &'a str,
    name: &'a str,
    day: &'a str,
    abv: String,
    style: &'a str,
    untappd_rating: Option<String>,
    untappd_href: Option<&'a str>,
}

impl<'a> From<&'a EnrichedBeerEntry> for OutputRow<'a> {
    fn from(e: &'a EnrichedBeerEntry) -> Self {
        Self {
            brewery: &e.beer.brewery,
            name: &e.beer.name,
            day: &e.beer.day,
            abv: format_number(e.beer.abv),
            style: &e.beer.style,
            untappd_rating: e.untappd_rating().map(format_number),
            untappd_href: e.untappd_href(),
        }
    }
}

/// Shortest round-trip rendering: `5`, `4.2`, never `5.0`.
pub fn format_number(v: f64) -> String {
    format!("{v}")
}

/// Serialize entries to CSV text with a header row. Absent rating fields
/// render as empty cells.
pub fn to_csv_string(entries: &[EnrichedBeerEntry]) -> RatingsResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS)?;
    for entry in entries {
        wtr.serialize(OutputRow::from(entry))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| RatingsError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| RatingsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// `output-<24 hex chars>.csv`, from a CSPRNG.
pub fn random_output_filename() -> String {
    let mut bytes = [0u8; FILENAME_RANDOM_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("output-{}.csv", hex::encode(bytes))
}

/// Write the CSV for `entries` into `dir` under a fresh random name.
///
/// The file is created with create-new semantics and never overwrites. A
/// failed write removes the partial file.
pub fn write_csv(dir: &Path, entries: &[EnrichedBeerEntry]) -> RatingsResult<PathBuf> {
    let text = to_csv_string(entries)?;
    let path = dir.join(random_output_filename());

    create_filled(&path, |file| file.write_all(text.as_bytes()))?;

    tracing::info!("wrote {} rows to {}", entries.len(), path.display());
    Ok(path)
}

/// Create `path` (which must not exist) and fill it; on any error after
/// creation the file is deleted again.
fn create_filled(path: &Path, fill: impl FnOnce(&mut File) -> io::Result<()>) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;

    if let Err(e) = fill(&mut file).and_then(|()| file.flush()) {
        drop(file);
        if let Err(rm) = fs::remove_file(path) {
            tracing::warn!("could not remove partial {}: {rm}", path.display());
        }
        return Err(e);
    }
    Ok(())
}
