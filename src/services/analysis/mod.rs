//! Market analysis pipeline.
//!
//! Pure, stateless feature extraction over a price/volume series: trend,
//! volatility, volume, spike detection, momentum, and a coarse sentiment
//! label. Each analyzer is a function of its inputs only, so the whole
//! pipeline is safe to run concurrently across requests.

pub mod momentum;
pub mod sentiment;
pub mod spikes;
pub mod trend;
pub mod volatility;
pub mod volume;

use crate::types::{daily_changes, AnalysisReport, PricePoint};
use thiserror::Error;

pub use spikes::DEFAULT_SPIKE_THRESHOLD;

/// Fatal input conditions that prevent producing an analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("no price data provided for analysis")]
    EmptySeries,
    #[error("first-half average price is zero, trend is undefined")]
    ZeroBaseline,
}

/// Run every analyzer over the series and assemble the report.
///
/// `spike_threshold` is the floor for spike detection (percent); the
/// effective threshold adapts upward with the data.
pub fn analyze_series(
    series: &[PricePoint],
    spike_threshold: f64,
) -> Result<AnalysisReport, DataError> {
    if series.is_empty() {
        return Err(DataError::EmptySeries);
    }

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let volumes: Vec<f64> = series.iter().map(|p| p.volume).collect();
    let changes = daily_changes(&prices);

    let trend = trend::analyze(&prices)?;
    let volatility = volatility::analyze(&changes);
    let volume = volume::analyze(&volumes);
    let spikes = spikes::detect(&changes, spike_threshold);
    let momentum = momentum::calculate(&prices);
    let sentiment = sentiment::classify(&trend, &volatility, &spikes);

    Ok(AnalysisReport {
        trend,
        volatility,
        volume,
        spikes,
        momentum,
        sentiment,
    })
}

/// Arithmetic mean. Returns 0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation. Returns 0 for fewer than two values.
pub(crate) fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentiment, TrendDirection};

    fn series_from_prices(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp_ms: i as i64 * 86_400_000,
                price,
                volume: 1_000.0,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_is_fatal() {
        assert_eq!(
            analyze_series(&[], DEFAULT_SPIKE_THRESHOLD),
            Err(DataError::EmptySeries)
        );
    }

    #[test]
    fn test_single_point_series_is_stable() {
        let series = series_from_prices(&[100.0]);
        let report = analyze_series(&series, DEFAULT_SPIKE_THRESHOLD).unwrap();
        assert_eq!(report.trend.direction, TrendDirection::Stable);
        assert_eq!(report.trend.strength, 0.0);
        assert!(report.spikes.is_empty());
        assert_eq!(report.momentum, 0.0);
        assert_eq!(report.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_rising_series_report() {
        let series = series_from_prices(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0]);
        let report = analyze_series(&series, DEFAULT_SPIKE_THRESHOLD).unwrap();
        assert_eq!(report.trend.direction, TrendDirection::Rising);
        assert!(report.momentum >= -1.0 && report.momentum <= 1.0);
    }

    #[test]
    fn test_mean_and_stdev_helpers() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
        assert_eq!(sample_stdev(&[5.0]), 0.0);
        // Sample stdev of [2, 4, 4, 4, 5, 5, 7, 9] is ~2.138.
        let sd = sample_stdev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.13809).abs() < 1e-4);
    }
}
