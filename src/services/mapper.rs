//! Feature-summary to music-parameter mapping.
//!
//! Two-path flow: attempt the injected reasoning provider (bounded by a
//! timeout), fall back to the deterministic formula on any failure, and
//! always normalize the winning candidate through the validator. Callers
//! therefore get a contract-valid [`MusicParameters`] on every path;
//! reasoning failures never escape this module.

use crate::services::validator;
use crate::types::{FeatureSummary, MusicParameters, Scale, TrendDirection};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// An external service that proposes parameter candidates from a feature
/// summary. Always untrusted: the returned bag may be missing fields,
/// malformed, or out of range.
#[async_trait]
pub trait ReasoningProvider: Send + Sync {
    async fn propose(&self, summary: &FeatureSummary) -> anyhow::Result<Value>;
}

/// Why the reasoning path was abandoned. Internal only; the mapper recovers
/// from every variant by switching to the deterministic path.
#[derive(Debug, Error)]
enum ReasoningUnavailable {
    #[error("no reasoning provider configured")]
    NotConfigured,
    #[error("reasoning call timed out")]
    TimedOut,
    #[error("reasoning call failed: {0}")]
    Failed(String),
    #[error("reasoning returned a non-object payload")]
    Malformed,
}

/// Maps analysis features plus a style preset into validated music
/// parameters.
pub struct ParameterMapper {
    provider: Option<Arc<dyn ReasoningProvider>>,
    timeout: Duration,
}

impl ParameterMapper {
    pub fn new(provider: Option<Arc<dyn ReasoningProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Whether a reasoning provider is wired in.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Produce music parameters for the summary. Infallible: any reasoning
    /// failure falls back to the deterministic formula, and both paths pass
    /// through the validator.
    pub async fn map(&self, summary: &FeatureSummary) -> MusicParameters {
        let candidate = match self.attempt_reasoning(summary).await {
            Ok(candidate) => {
                debug!("reasoning path produced a candidate");
                candidate
            }
            Err(reason) => {
                warn!("{}, using deterministic mapping", reason);
                deterministic_candidate(summary)
            }
        };

        validator::normalize(&candidate)
    }

    async fn attempt_reasoning(
        &self,
        summary: &FeatureSummary,
    ) -> Result<Value, ReasoningUnavailable> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ReasoningUnavailable::NotConfigured)?;

        match tokio::time::timeout(self.timeout, provider.propose(summary)).await {
            Ok(Ok(value)) if value.is_object() => Ok(value),
            Ok(Ok(_)) => Err(ReasoningUnavailable::Malformed),
            Ok(Err(e)) => Err(ReasoningUnavailable::Failed(e.to_string())),
            Err(_) => Err(ReasoningUnavailable::TimedOut),
        }
    }
}

/// The deterministic candidate. Intentionally produces the same untrusted
/// shape as the reasoning path so both share the validator choke point
/// (energyScore in particular is left unclamped here).
fn deterministic_candidate(summary: &FeatureSummary) -> Value {
    let volatility = summary.volatility.average;

    let tempo = (90.0 + volatility * 5.0 + summary.preset.tempo_bias())
        .clamp(validator::TEMPO_MIN, validator::TEMPO_MAX);

    let scale = if summary.trend.direction == TrendDirection::Rising {
        Scale::Major
    } else {
        Scale::Minor
    };

    let brightness = (0.5 + summary.total_change_percent / 20.0).clamp(0.2, 0.9);

    json!({
        "tempo": tempo as u16,
        "scale": scale,
        "key": validator::DEFAULT_KEY,
        "filterCutoff": (volatility / 10.0).min(0.8),
        "brightness": brightness,
        "drumDensity": summary.volume.relative_level,
        "intensity": summary.momentum.abs(),
        "energyScore": volatility / 10.0 + summary.momentum.abs(),
        "trendDirection": summary.trend.direction,
        "trendStrength": summary.trend.strength,
    })
}
