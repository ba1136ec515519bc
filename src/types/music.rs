use crate::types::TrendDirection;
use serde::{Deserialize, Serialize};

/// Keys the output contract accepts: the 12 chromatic pitch names.
pub const ALLOWED_KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Tonal scale of the generated track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Major,
    Minor,
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
        }
    }
}

/// Caller-chosen creative style. A closed set; each preset carries its
/// tempo bias and default tonal polarity as data so mappings stay
/// exhaustiveness-checked instead of string-compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    NeonHouse,
    LoFiDrift,
    IndustrialTech,
}

impl StylePreset {
    /// Tempo adjustment applied on top of the volatility-derived base tempo.
    pub fn tempo_bias(&self) -> f64 {
        match self {
            StylePreset::NeonHouse => 20.0,
            StylePreset::LoFiDrift => -20.0,
            StylePreset::IndustrialTech => 0.0,
        }
    }

    /// Tonal polarity the preset leans toward when the market gives no
    /// direction of its own.
    pub fn default_scale(&self) -> Scale {
        match self {
            StylePreset::NeonHouse => Scale::Major,
            StylePreset::LoFiDrift => Scale::Minor,
            StylePreset::IndustrialTech => Scale::Minor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::NeonHouse => "neon-house",
            StylePreset::LoFiDrift => "lo-fi-drift",
            StylePreset::IndustrialTech => "industrial-tech",
        }
    }
}

/// The validated output contract consumed by the rendering collaborator.
///
/// Every field is guaranteed in range once it leaves the validator; nothing
/// upstream is trusted to enforce these bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicParameters {
    /// Beats per minute, in [60, 180].
    pub tempo: u16,
    pub scale: Scale,
    /// One of [`ALLOWED_KEYS`].
    pub key: String,
    /// Low-pass filter cutoff, in [0, 1].
    pub filter_cutoff: f64,
    /// Timbre brightness, in [0, 1].
    pub brightness: f64,
    /// Percussion density, in [0, 1].
    pub drum_density: f64,
    /// Overall intensity, in [0, 1].
    pub intensity: f64,
    /// Composite energy score, in [0, 1].
    pub energy_score: f64,
    pub trend_direction: TrendDirection,
    /// Trend strength carried through from analysis, in [0, 1].
    pub trend_strength: f64,
}
