//! Volatility level and consistency of daily swings.

use super::{mean, sample_stdev};
use crate::types::{VolatilityLevel, VolatilityResult};

/// Classify dispersion of the daily percent changes.
///
/// An empty input is perfectly calm: low level, full consistency, no spikes.
pub fn analyze(daily_changes: &[f64]) -> VolatilityResult {
    if daily_changes.is_empty() {
        return VolatilityResult {
            level: VolatilityLevel::Low,
            average: 0.0,
            consistency: 1.0,
            has_spikes: false,
        };
    }

    let abs_changes: Vec<f64> = daily_changes.iter().map(|c| c.abs()).collect();
    let average = mean(&abs_changes);
    let std = sample_stdev(&abs_changes);

    let level = if average > 5.0 {
        VolatilityLevel::High
    } else if average > 2.0 {
        VolatilityLevel::Medium
    } else {
        VolatilityLevel::Low
    };

    // Lower stdev relative to the mean means more uniform swings.
    let consistency = if average > 0.0 {
        (1.0 - std / average).max(0.0)
    } else {
        1.0
    };

    let max_change = abs_changes.iter().cloned().fold(f64::MIN, f64::max);

    VolatilityResult {
        level,
        average,
        consistency,
        has_spikes: max_change > average * 2.0,
    }
}
