//! Coarse sentiment label from trend and spike activity.

use crate::types::{Sentiment, Spike, TrendDirection, TrendResult, VolatilityResult};

/// Strength above which a directional trend reads as bullish/bearish.
const STRONG_TREND: f64 = 0.5;

/// Classify overall sentiment.
///
/// Precedence is load-bearing: a strong directional trend wins over spike
/// activity, so a strongly rising market with spikes reads bullish, not
/// volatile. The volatility result is accepted for signature stability but
/// does not currently influence the label.
pub fn classify(
    trend: &TrendResult,
    _volatility: &VolatilityResult,
    spikes: &[Spike],
) -> Sentiment {
    if trend.direction == TrendDirection::Rising && trend.strength > STRONG_TREND {
        Sentiment::Bullish
    } else if trend.direction == TrendDirection::Falling && trend.strength > STRONG_TREND {
        Sentiment::Bearish
    } else if !spikes.is_empty() {
        Sentiment::Volatile
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VolatilityLevel;

    fn trend(direction: TrendDirection, strength: f64) -> TrendResult {
        TrendResult {
            direction,
            strength,
            change_percent: 0.0,
        }
    }

    fn calm() -> VolatilityResult {
        VolatilityResult {
            level: VolatilityLevel::Low,
            average: 0.0,
            consistency: 1.0,
            has_spikes: false,
        }
    }

    fn spike() -> Spike {
        Spike {
            day_index: 0,
            change_percent: 10.0,
            magnitude: 5.0,
        }
    }

    #[test]
    fn test_strong_rise_is_bullish() {
        let label = classify(&trend(TrendDirection::Rising, 0.8), &calm(), &[]);
        assert_eq!(label, Sentiment::Bullish);
    }

    #[test]
    fn test_strong_fall_is_bearish() {
        let label = classify(&trend(TrendDirection::Falling, 0.9), &calm(), &[]);
        assert_eq!(label, Sentiment::Bearish);
    }

    #[test]
    fn test_spikes_without_strong_trend_are_volatile() {
        let label = classify(&trend(TrendDirection::Stable, 0.0), &calm(), &[spike()]);
        assert_eq!(label, Sentiment::Volatile);
    }

    #[test]
    fn test_quiet_market_is_neutral() {
        let label = classify(&trend(TrendDirection::Stable, 0.1), &calm(), &[]);
        assert_eq!(label, Sentiment::Neutral);
    }

    #[test]
    fn test_strong_trend_outranks_spikes() {
        // Both conditions hold; the trend label must win.
        let label = classify(&trend(TrendDirection::Rising, 0.9), &calm(), &[spike()]);
        assert_eq!(label, Sentiment::Bullish);
    }

    #[test]
    fn test_weak_trend_with_spikes_is_volatile() {
        let label = classify(&trend(TrendDirection::Rising, 0.3), &calm(), &[spike()]);
        assert_eq!(label, Sentiment::Volatile);
    }

    #[test]
    fn test_exact_half_strength_is_not_directional() {
        let label = classify(&trend(TrendDirection::Rising, 0.5), &calm(), &[]);
        assert_eq!(label, Sentiment::Neutral);
    }
}
