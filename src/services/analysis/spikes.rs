//! Adaptive-threshold spike detection over daily changes.

use super::{mean, sample_stdev};
use crate::types::Spike;

/// Minimum percent move that can ever count as a spike.
pub const DEFAULT_SPIKE_THRESHOLD: f64 = 3.0;

/// Detect daily changes whose magnitude exceeds
/// `max(threshold, avg + 2 * stdev)` of the absolute changes.
/// Output preserves day-index order.
pub fn detect(daily_changes: &[f64], threshold: f64) -> Vec<Spike> {
    if daily_changes.is_empty() {
        return Vec::new();
    }

    let abs_changes: Vec<f64> = daily_changes.iter().map(|c| c.abs()).collect();
    let avg = mean(&abs_changes);
    let std = sample_stdev(&abs_changes);
    let effective_threshold = threshold.max(avg + 2.0 * std);

    daily_changes
        .iter()
        .enumerate()
        .filter(|(_, change)| change.abs() > effective_threshold)
        .map(|(day_index, &change_percent)| Spike {
            day_index,
            change_percent,
            magnitude: if avg > 0.0 {
                change_percent.abs() / avg
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_spikes() {
        assert!(detect(&[], DEFAULT_SPIKE_THRESHOLD).is_empty());
    }

    #[test]
    fn test_quiet_series_has_no_spikes() {
        assert!(detect(&[1.0, -1.0, 0.5, -0.5], DEFAULT_SPIKE_THRESHOLD).is_empty());
    }

    #[test]
    fn test_outlier_day_is_flagged() {
        // Eight quiet days then a 50% move: avg ~6.4, stdev ~16.3, so the
        // effective threshold ~39.1 sits below the outlier.
        let changes = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 50.0];
        let spikes = detect(&changes, DEFAULT_SPIKE_THRESHOLD);
        assert_eq!(spikes.len(), 1);
        assert_eq!(spikes[0].day_index, 8);
        assert_eq!(spikes[0].change_percent, 50.0);
        assert!(spikes[0].magnitude > 1.0);
    }

    #[test]
    fn test_borderline_outlier_stays_below_adaptive_bound() {
        // One big move among only four quiet days keeps the stdev large
        // enough that avg + 2*stdev exceeds the move itself.
        assert!(detect(&[1.0, 1.0, 1.0, 1.0, 50.0], DEFAULT_SPIKE_THRESHOLD).is_empty());
    }

    #[test]
    fn test_spikes_preserve_index_order() {
        let mut changes = vec![0.1; 16];
        changes[6] = 30.0;
        changes[11] = -35.0;
        let spikes = detect(&changes, DEFAULT_SPIKE_THRESHOLD);
        assert_eq!(spikes.len(), 2);
        assert_eq!(spikes[0].day_index, 6);
        assert_eq!(spikes[1].day_index, 11);
    }

    #[test]
    fn test_negative_spike_keeps_sign() {
        let spikes = detect(&[0.1, 0.1, 0.1, -30.0, 0.1, 0.1, 0.1, 0.1], 3.0);
        assert_eq!(spikes.len(), 1);
        assert!(spikes[0].change_percent < 0.0);
        assert!(spikes[0].magnitude > 0.0);
    }

    #[test]
    fn test_adaptive_threshold_raises_floor() {
        // All changes are large but uniform: avg = 10, stdev = 0, effective
        // threshold = max(3, 10) = 10, and nothing strictly exceeds it.
        assert!(detect(&[10.0, -10.0, 10.0, -10.0], 3.0).is_empty());
    }
}
