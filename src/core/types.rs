use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_hour_index, decimal_to_f64, format_time_axis_label};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One historical price observation, already projected onto a numeric x axis
/// and carrying the pre-formatted display label for its x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Builds a sample from a timestamped decimal price: x is the hour index,
    /// the label is a two-line `"3PM\n1/7"` style tick text.
    pub fn from_price_observation(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_hour_index(time),
            y: decimal_to_f64(price, "price")?,
            label: format_time_axis_label(time),
        })
    }
}

/// Inclusive, contiguous sub-range of samples currently scrolled into view.
///
/// The range is a hard caller contract: it must address a valid sub-range of
/// the sample sequence, and layout fails fast when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize,
}

impl VisibleRange {
    pub fn new(first: usize, last: usize) -> ChartResult<Self> {
        if first > last {
            return Err(ChartError::InvalidData(format!(
                "visible range first ({first}) must not exceed last ({last})"
            )));
        }
        Ok(Self { first, last })
    }

    /// Number of sample indices covered by the range.
    #[must_use]
    pub fn count(self) -> usize {
        self.last - self.first + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }

    pub fn validate_for(self, data_len: usize) -> ChartResult<()> {
        if self.last >= data_len {
            return Err(ChartError::InvalidRange {
                first: self.first,
                last: self.last,
                data_len,
            });
        }
        Ok(())
    }
}
