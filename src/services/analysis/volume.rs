//! Volume trend and relative level.

use super::mean;
use crate::types::{VolumeResult, VolumeTrend};

/// Second-half mean must exceed the first by this factor to count as increasing.
const INCREASE_FACTOR: f64 = 1.2;
/// Second-half mean must fall below the first by this factor to count as decreasing.
const DECREASE_FACTOR: f64 = 0.8;

/// Analyze traded volume: half-split trend plus a min-max normalized level.
///
/// An empty input yields a stable mid-level result.
pub fn analyze(volumes: &[f64]) -> VolumeResult {
    if volumes.is_empty() {
        return VolumeResult {
            trend: VolumeTrend::Stable,
            relative_level: 0.5,
            average: 0.0,
        };
    }

    let mid = volumes.len() / 2;
    let first_avg = mean(&volumes[..mid]);
    let second_avg = mean(&volumes[mid..]);

    let trend = if second_avg > first_avg * INCREASE_FACTOR {
        VolumeTrend::Increasing
    } else if second_avg < first_avg * DECREASE_FACTOR {
        VolumeTrend::Decreasing
    } else {
        VolumeTrend::Stable
    };

    let average = mean(volumes);
    let max_vol = volumes.iter().cloned().fold(f64::MIN, f64::max);
    let min_vol = volumes.iter().cloned().fold(f64::MAX, f64::min);
    let relative_level = if max_vol > min_vol {
        (average - min_vol) / (max_vol - min_vol)
    } else {
        0.5
    };

    VolumeResult {
        trend,
        relative_level,
        average,
    }
}
