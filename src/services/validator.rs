//! The single normalization choke point for music parameters.
//!
//! Every candidate parameter bag - whether it came from the reasoning
//! provider or the deterministic fallback - passes through [`normalize`]
//! before it reaches a caller. The function is total: any JSON value in,
//! a contract-valid [`MusicParameters`] out.

use crate::types::{MusicParameters, Scale, TrendDirection, ALLOWED_KEYS};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_TEMPO: u16 = 120;
pub const DEFAULT_KEY: &str = "C";
pub const DEFAULT_UNIT: f64 = 0.5;

pub const TEMPO_MIN: f64 = 60.0;
pub const TEMPO_MAX: f64 = 180.0;

/// Normalize an untrusted candidate into the output contract.
///
/// Numeric fields are coerced (JSON numbers, or strings that parse as
/// numbers), clamped to their declared range, and defaulted when absent or
/// non-coercible; non-finite values count as non-coercible. Enum fields are
/// accepted only on exact membership, otherwise defaulted (scale -> major,
/// trendDirection -> stable, key -> "C").
pub fn normalize(candidate: &Value) -> MusicParameters {
    let tempo_raw = number_field(candidate, "tempo").unwrap_or(DEFAULT_TEMPO as f64);
    let tempo = tempo_raw.clamp(TEMPO_MIN, TEMPO_MAX) as u16;

    let scale = match string_field(candidate, "scale") {
        Some("major") => Scale::Major,
        Some("minor") => Scale::Minor,
        other => {
            if let Some(value) = other {
                debug!("correcting invalid scale {:?} to major", value);
            }
            Scale::Major
        }
    };

    let key = match string_field(candidate, "key") {
        Some(value) if ALLOWED_KEYS.contains(&value) => value.to_string(),
        other => {
            if let Some(value) = other {
                debug!("correcting invalid key {:?} to {}", value, DEFAULT_KEY);
            }
            DEFAULT_KEY.to_string()
        }
    };

    let trend_direction = match string_field(candidate, "trendDirection") {
        Some("rising") => TrendDirection::Rising,
        Some("falling") => TrendDirection::Falling,
        Some("stable") => TrendDirection::Stable,
        other => {
            if let Some(value) = other {
                debug!("correcting invalid trendDirection {:?} to stable", value);
            }
            TrendDirection::Stable
        }
    };

    MusicParameters {
        tempo,
        scale,
        key,
        filter_cutoff: unit_field(candidate, "filterCutoff"),
        brightness: unit_field(candidate, "brightness"),
        drum_density: unit_field(candidate, "drumDensity"),
        intensity: unit_field(candidate, "intensity"),
        energy_score: unit_field(candidate, "energyScore"),
        trend_direction,
        trend_strength: unit_field(candidate, "trendStrength"),
    }
}

/// Coerce a field to a finite number, accepting numeric strings.
fn number_field(candidate: &Value, field: &str) -> Option<f64> {
    let value = candidate.get(field)?;
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn string_field<'a>(candidate: &'a Value, field: &str) -> Option<&'a str> {
    candidate.get(field)?.as_str()
}

/// A [0, 1] field: coerced, clamped, defaulted to 0.5.
fn unit_field(candidate: &Value, field: &str) -> f64 {
    number_field(candidate, field)
        .map(|n| n.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_UNIT)
}
