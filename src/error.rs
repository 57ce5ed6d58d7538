use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Structural violations of the series contract.
///
/// These are the only failures the core raises: a series handed to the
/// scanner must already be ordered, so they surface at construction time,
/// never during a scan.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("bar timestamps must be strictly increasing: {next} follows {prev}")]
    OutOfOrder {
        prev: DateTime<Utc>,
        next: DateTime<Utc>,
    },
}

/// Failures while replaying a series from a CSV file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse csv row")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Series(#[from] SeriesError),
}
