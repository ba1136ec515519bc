use crate::types::{PricePoint, StylePreset};
use serde::{Deserialize, Serialize};

/// Direction of the price trend over the analyzed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Trend analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Trend strength, normalized to [0, 1].
    pub strength: f64,
    /// Percent change between first-half and second-half mean price.
    pub change_percent: f64,
}

/// Coarse volatility bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl VolatilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityLevel::Low => "low",
            VolatilityLevel::Medium => "medium",
            VolatilityLevel::High => "high",
        }
    }
}

/// Volatility analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityResult {
    pub level: VolatilityLevel,
    /// Mean absolute daily change, in percent. Always >= 0.
    pub average: f64,
    /// How uniform the daily swings are, in [0, 1] (1 = perfectly uniform).
    pub consistency: f64,
    /// Whether any single swing exceeded twice the average.
    pub has_spikes: bool,
}

/// Direction of traded volume over the analyzed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl VolumeTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeTrend::Increasing => "increasing",
            VolumeTrend::Decreasing => "decreasing",
            VolumeTrend::Stable => "stable",
        }
    }
}

/// Volume analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResult {
    pub trend: VolumeTrend,
    /// Where the mean volume sits between the window min and max, in [0, 1].
    pub relative_level: f64,
    pub average: f64,
}

/// A daily change whose magnitude exceeded the adaptive threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spike {
    /// Index into the daily-change sequence.
    pub day_index: usize,
    pub change_percent: f64,
    /// Size of the move relative to the average absolute change.
    pub magnitude: f64,
}

/// Overall market sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Volatile,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Volatile => "volatile",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Aggregate of every analyzer's output for one series.
/// Computed once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub trend: TrendResult,
    pub volatility: VolatilityResult,
    pub volume: VolumeResult,
    /// Detected spikes, in day-index order.
    pub spikes: Vec<Spike>,
    /// Short-window rate of change, normalized to [-1, 1].
    pub momentum: f64,
    pub sentiment: Sentiment,
}

/// Structured feature bundle handed to the reasoning provider and consumed
/// by the deterministic parameter mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummary {
    pub current_price: f64,
    /// Percent change from the first to the last price of the series.
    pub total_change_percent: f64,
    pub average_volume: f64,
    pub trend: TrendResult,
    pub volatility: VolatilityResult,
    pub volume: VolumeResult,
    pub spike_count: usize,
    pub momentum: f64,
    pub sentiment: Sentiment,
    pub preset: StylePreset,
}

impl FeatureSummary {
    /// Build the summary from a validated series and its report.
    ///
    /// The series must be non-empty with positive prices (the same
    /// precondition the analysis pipeline enforces).
    pub fn new(series: &[PricePoint], report: &AnalysisReport, preset: StylePreset) -> Self {
        let first = series.first().map(|p| p.price).unwrap_or(0.0);
        let last = series.last().map(|p| p.price).unwrap_or(0.0);
        let total_change_percent = if first > 0.0 {
            ((last - first) / first) * 100.0
        } else {
            0.0
        };
        let average_volume = if series.is_empty() {
            0.0
        } else {
            series.iter().map(|p| p.volume).sum::<f64>() / series.len() as f64
        };

        Self {
            current_price: last,
            total_change_percent,
            average_volume,
            trend: report.trend,
            volatility: report.volatility,
            volume: report.volume,
            spike_count: report.spikes.len(),
            momentum: report.momentum,
            sentiment: report.sentiment,
            preset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Rising).unwrap(),
            "\"rising\""
        );
        assert_eq!(
            serde_json::to_string(&VolatilityLevel::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&VolumeTrend::Increasing).unwrap(),
            "\"increasing\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Bullish).unwrap(),
            "\"bullish\""
        );
    }

    #[test]
    fn test_feature_summary_totals() {
        let series = vec![
            PricePoint {
                timestamp_ms: 0,
                price: 100.0,
                volume: 10.0,
            },
            PricePoint {
                timestamp_ms: 1,
                price: 110.0,
                volume: 30.0,
            },
        ];
        let report = AnalysisReport {
            trend: TrendResult {
                direction: TrendDirection::Rising,
                strength: 1.0,
                change_percent: 10.0,
            },
            volatility: VolatilityResult {
                level: VolatilityLevel::High,
                average: 10.0,
                consistency: 1.0,
                has_spikes: false,
            },
            volume: VolumeResult {
                trend: VolumeTrend::Increasing,
                relative_level: 0.5,
                average: 20.0,
            },
            spikes: Vec::new(),
            momentum: 0.0,
            sentiment: Sentiment::Bullish,
        };

        let summary = FeatureSummary::new(&series, &report, StylePreset::NeonHouse);
        assert!((summary.current_price - 110.0).abs() < 1e-9);
        assert!((summary.total_change_percent - 10.0).abs() < 1e-9);
        assert!((summary.average_volume - 20.0).abs() < 1e-9);
        assert_eq!(summary.spike_count, 0);
    }
}
