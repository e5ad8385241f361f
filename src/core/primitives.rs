use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Fractional hours since the unix epoch, the x-axis projection used for
/// hourly price history.
#[must_use]
pub fn datetime_to_hour_index(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 3_600_000.0
}

/// Two-line x-axis tick text: clock hour on top, month/day below.
#[must_use]
pub fn format_time_axis_label(time: DateTime<Utc>) -> String {
    time.format("%-I%p\n%-m/%-d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::{datetime_to_hour_index, format_time_axis_label};

    #[test]
    fn hour_index_is_fractional_hours_since_epoch() {
        let time = chrono::Utc.with_ymd_and_hms(1970, 1, 1, 2, 30, 0).unwrap();
        assert!((datetime_to_hour_index(time) - 2.5).abs() <= 1e-12);
    }

    #[test]
    fn time_axis_label_has_hour_and_date_lines() {
        let time = chrono::Utc.with_ymd_and_hms(2024, 1, 7, 15, 0, 0).unwrap();
        assert_eq!(format_time_axis_label(time), "3PM\n1/7");
    }
}
