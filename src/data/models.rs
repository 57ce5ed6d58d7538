use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// One OHLC observation for a fixed time interval.
///
/// The scanner assumes `low <= min(open, close)` and
/// `max(open, close) <= high` but does not check it; a bar violating the
/// shape simply matches rules (or fails to) according to the raw arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Directional magnitude of the bar, `|close - open|`.
    pub fn body(&self) -> f64 {
        (self.open - self.close).abs()
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint of the body, used by the star patterns.
    pub fn body_midpoint(&self) -> f64 {
        (self.open + self.close) / 2.0
    }
}

/// An ordered, index-addressable OHLC series.
///
/// Construction enforces strictly increasing timestamps (which also rules
/// out duplicates); the scanner only ever reads a constructed series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for pair in bars.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(SeriesError::OutOfOrder {
                    prev: pair[0].timestamp,
                    next: pair[1].timestamp,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
