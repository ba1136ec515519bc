use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// CoinGecko API key (optional, enables the pro endpoint).
    pub coingecko_api_key: Option<String>,
    /// OpenAI API key for the reasoning provider (optional; without it the
    /// mapper always takes the deterministic path).
    pub openai_api_key: Option<String>,
    /// Model used by the reasoning provider.
    pub openai_model: String,
    /// Upper bound on a single reasoning call, in milliseconds.
    pub reasoning_timeout_ms: u64,
    /// ElevenLabs API key for audio rendering (optional).
    pub elevenlabs_api_key: Option<String>,
    /// Directory rendered audio files are written to.
    pub audio_output_dir: String,
    /// TTL for cached history fetches, in seconds.
    pub history_cache_ttl_secs: u64,
    /// Default lookback window for history fetches, in days.
    pub default_history_days: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        Self {
            host,
            port,
            coingecko_api_key: env::var("COINGECKO_API_KEY").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            reasoning_timeout_ms: env::var("REASONING_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8_000),
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY").ok(),
            audio_output_dir: env::var("AUDIO_OUTPUT_DIR").unwrap_or_else(|_| "temp".to_string()),
            history_cache_ttl_secs: env::var("HISTORY_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            default_history_days: env::var("DEFAULT_HISTORY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
