use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{DepartureBucket, FlightDataset, FlightRecord, StopClass};

/// Header names the loader understands. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "airline",
    "source_city",
    "destination_city",
    "departure_time",
    "stops",
    "duration",
    "days_left",
    "price",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Terminal failures of a load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Parse(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and validate the fare table stored at `path`.
pub fn load_file(path: &Path) -> Result<FlightDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(file)
}

/// Parse CSV text with a header row into a [`FlightDataset`].
///
/// Rows with an absent or unparsable recognized field, an empty airline or a
/// zero price are dropped and counted; they never abort the load.
pub fn parse_records<R: Read>(reader: R) -> Result<FlightDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize::<RawRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) if is_row_level(&e) => {
                log::trace!("dropping row: {e}");
                dropped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match row.into_record() {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} invalid rows, kept {}", records.len());
    }

    Ok(FlightDataset::new(records, dropped))
}

/// Errors that concern a single row rather than the text as a whole. The
/// reader is flexible, so short or wide rows never surface as `UnequalLengths`.
fn is_row_level(e: &csv::Error) -> bool {
    matches!(e.kind(), csv::ErrorKind::Deserialize { .. })
}

// ---------------------------------------------------------------------------
// Row schema
// ---------------------------------------------------------------------------

/// One CSV row with loose typing: every unreadable cell becomes `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    airline: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    source_city: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    destination_city: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    departure_time: Option<DepartureBucket>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    stops: Option<StopClass>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    duration: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    days_left: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> Option<FlightRecord> {
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0)?;
        FlightRecord::new(
            non_empty(self.airline)?,
            non_empty(self.source_city)?,
            non_empty(self.destination_city)?,
            self.departure_time?,
            self.stops?,
            self.duration?,
            self.days_left?,
            price.round() as u64,
        )
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
