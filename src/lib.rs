//! Sonify - maps cryptocurrency price history to validated music parameters.
//!
//! The core is a stateless pipeline: a price/volume series is analyzed for
//! trend, volatility, volume, spikes, momentum, and sentiment; the resulting
//! features plus a caller-chosen style preset are mapped (via an optional
//! reasoning provider with a deterministic fallback) into a bounded,
//! validated set of music parameters for a downstream renderer.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::ParameterMapper;
use sources::{CoinGeckoClient, MusicRenderClient};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub history_client: Arc<CoinGeckoClient>,
    pub mapper: Arc<ParameterMapper>,
    pub render_client: Option<Arc<MusicRenderClient>>,
}

// Re-export commonly used types
pub use services::{analyze_series, normalize, DataError, DEFAULT_SPIKE_THRESHOLD};
pub use types::*;
