//! Conversions from host-side sample types into plot coordinates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Converts a decimal sample value, rejecting values outside `f64` range.
pub fn decimal_coordinate(value: Decimal, what: &str) -> ChartResult<f64> {
    match value.to_f64() {
        Some(coordinate) if coordinate.is_finite() => Ok(coordinate),
        _ => Err(ChartError::InvalidData(format!(
            "{what} `{value}` has no finite f64 coordinate"
        ))),
    }
}

/// Time coordinate in fractional unix seconds (millisecond resolution).
#[must_use]
pub fn time_coordinate(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{decimal_coordinate, time_coordinate};

    #[test]
    fn time_coordinate_keeps_milliseconds() {
        let time = Utc
            .timestamp_millis_opt(1_700_000_000_250)
            .single()
            .expect("valid timestamp");
        assert_eq!(time_coordinate(time), 1_700_000_000.25);
    }

    #[test]
    fn decimal_coordinate_converts_plain_values() {
        let value = Decimal::new(12_345, 2);
        let coordinate = decimal_coordinate(value, "value").expect("convertible");
        assert!((coordinate - 123.45).abs() <= 1e-12);
    }
}
