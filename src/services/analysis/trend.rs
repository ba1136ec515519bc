//! Price trend direction and strength.

use super::{mean, DataError};
use crate::types::{TrendDirection, TrendResult};

/// Percent gap between half-means beyond which the trend counts as directional.
const DIRECTION_THRESHOLD_PCT: f64 = 2.0;

/// Analyze trend by comparing the first-half mean price against the
/// second-half mean. Fewer than two prices is a stable no-trend.
pub fn analyze(prices: &[f64]) -> Result<TrendResult, DataError> {
    if prices.len() < 2 {
        return Ok(TrendResult {
            direction: TrendDirection::Stable,
            strength: 0.0,
            change_percent: 0.0,
        });
    }

    let mid = prices.len() / 2;
    let first_avg = mean(&prices[..mid]);
    let second_avg = mean(&prices[mid..]);

    if first_avg == 0.0 {
        return Err(DataError::ZeroBaseline);
    }

    let change_percent = ((second_avg - first_avg) / first_avg) * 100.0;

    let direction = if change_percent > DIRECTION_THRESHOLD_PCT {
        TrendDirection::Rising
    } else if change_percent < -DIRECTION_THRESHOLD_PCT {
        TrendDirection::Falling
    } else {
        TrendDirection::Stable
    };

    Ok(TrendResult {
        direction,
        strength: (change_percent.abs() / 10.0).min(1.0),
        change_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_price_is_stable() {
        let result = analyze(&[100.0]).unwrap();
        assert_eq!(result.direction, TrendDirection::Stable);
        assert_eq!(result.strength, 0.0);
        assert_eq!(result.change_percent, 0.0);
    }

    #[test]
    fn test_steady_climb_is_rising() {
        // First half mean 101, second half mean ~104.5: > 2% apart.
        let result = analyze(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0]).unwrap();
        assert_eq!(result.direction, TrendDirection::Rising);
        assert!(result.change_percent > 2.0);
        assert!(result.strength > 0.0 && result.strength <= 1.0);
    }

    #[test]
    fn test_decline_is_falling() {
        let result = analyze(&[100.0, 90.0, 80.0, 70.0, 60.0]).unwrap();
        assert_eq!(result.direction, TrendDirection::Falling);
        assert!(result.change_percent < -2.0);
    }

    #[test]
    fn test_flat_series_is_stable() {
        let result = analyze(&[100.0, 100.5, 99.5, 100.0]).unwrap();
        assert_eq!(result.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_strength_caps_at_one() {
        let result = analyze(&[100.0, 100.0, 300.0, 300.0]).unwrap();
        assert_eq!(result.strength, 1.0);
    }

    #[test]
    fn test_zero_baseline_fails() {
        assert_eq!(analyze(&[0.0, 0.0, 100.0]), Err(DataError::ZeroBaseline));
    }
}
