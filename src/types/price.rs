use serde::{Deserialize, Serialize};

/// A single price/volume sample for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Sample time as a Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Price in USD. Must be positive.
    pub price: f64,
    /// Traded volume for the sample period. Must be non-negative.
    pub volume: f64,
}

/// Reasons a caller-supplied series is rejected before analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesValidationError {
    #[error("series is empty")]
    Empty,
    #[error("point {index} has non-positive price")]
    NonPositivePrice { index: usize },
    #[error("point {index} has negative volume")]
    NegativeVolume { index: usize },
    #[error("point {index} is out of chronological order")]
    OutOfOrder { index: usize },
}

/// Validate that a series is non-empty, chronologically ascending, and
/// within the per-point price/volume bounds.
pub fn validate_series(points: &[PricePoint]) -> Result<(), SeriesValidationError> {
    if points.is_empty() {
        return Err(SeriesValidationError::Empty);
    }

    for (index, point) in points.iter().enumerate() {
        if !(point.price > 0.0) {
            return Err(SeriesValidationError::NonPositivePrice { index });
        }
        if !(point.volume >= 0.0) {
            return Err(SeriesValidationError::NegativeVolume { index });
        }
        if index > 0 && point.timestamp_ms < points[index - 1].timestamp_ms {
            return Err(SeriesValidationError::OutOfOrder { index });
        }
    }

    Ok(())
}

/// Percent change between each pair of consecutive prices.
/// Output length is `prices.len() - 1` (empty for fewer than two prices).
pub fn daily_changes(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]) / pair[0]) * 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp_ms: i64, price: f64, volume: f64) -> PricePoint {
        PricePoint {
            timestamp_ms,
            price,
            volume,
        }
    }

    #[test]
    fn test_daily_changes_length() {
        assert!(daily_changes(&[]).is_empty());
        assert!(daily_changes(&[100.0]).is_empty());
        assert_eq!(daily_changes(&[100.0, 110.0, 99.0]).len(), 2);
    }

    #[test]
    fn test_daily_changes_values() {
        let changes = daily_changes(&[100.0, 110.0, 99.0]);
        assert!((changes[0] - 10.0).abs() < 1e-9);
        assert!((changes[1] - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_validate_series_accepts_valid() {
        let series = vec![point(0, 100.0, 1.0), point(1000, 101.0, 0.0)];
        assert!(validate_series(&series).is_ok());
    }

    #[test]
    fn test_validate_series_rejects_empty() {
        assert_eq!(validate_series(&[]), Err(SeriesValidationError::Empty));
    }

    #[test]
    fn test_validate_series_rejects_bad_points() {
        let series = vec![point(0, 100.0, 1.0), point(1000, 0.0, 1.0)];
        assert_eq!(
            validate_series(&series),
            Err(SeriesValidationError::NonPositivePrice { index: 1 })
        );

        let series = vec![point(0, 100.0, -1.0)];
        assert_eq!(
            validate_series(&series),
            Err(SeriesValidationError::NegativeVolume { index: 0 })
        );

        let series = vec![point(1000, 100.0, 1.0), point(0, 101.0, 1.0)];
        assert_eq!(
            validate_series(&series),
            Err(SeriesValidationError::OutOfOrder { index: 1 })
        );
    }

    #[test]
    fn test_price_point_serde_camel_case() {
        let json = serde_json::to_string(&point(1700000000000, 42.5, 1000.0)).unwrap();
        assert!(json.contains("\"timestampMs\""));
        assert!(json.contains("\"price\""));
        assert!(json.contains("\"volume\""));
    }
}
