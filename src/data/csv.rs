use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::data::models::{Bar, Series};
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct CsvBar {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl From<CsvBar> for Bar {
    fn from(row: CsvBar) -> Self {
        Bar {
            timestamp: row.timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
        }
    }
}

/// Read a series from `timestamp,open,high,low,close` CSV data.
///
/// Timestamps are RFC 3339. Extra columns (volume etc.) are ignored.
pub fn read_series<R: Read>(reader: R) -> Result<Series, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bars = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvBar = row?;
        bars.push(Bar::from(row));
    }
    Ok(Series::new(bars)?)
}

/// File-replay series provider: load a CSV file into a [`Series`].
pub fn load_csv(path: &Path) -> Result<Series, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let series = read_series(file)?;
    info!(bars = series.len(), path = %path.display(), "loaded ohlc series");
    Ok(series)
}
