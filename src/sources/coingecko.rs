//! Historical price data from CoinGecko.

use crate::error::{AppError, Result};
use crate::services::Cache;
use crate::types::PricePoint;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const COINGECKO_PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Instrument symbol to CoinGecko ID mapping.
pub const SYMBOL_TO_ID: &[(&str, &str)] = &[
    ("btc", "bitcoin"),
    ("eth", "ethereum"),
    ("sol", "solana"),
    ("avax", "avalanche-2"),
    ("matic", "matic-network"),
    ("bnb", "binancecoin"),
    ("xrp", "ripple"),
    ("ada", "cardano"),
    ("doge", "dogecoin"),
    ("dot", "polkadot"),
    ("link", "chainlink"),
];

/// CoinGecko market chart response: parallel [timestamp_ms, value] arrays.
#[derive(Debug, Deserialize)]
struct CoinGeckoMarketChart {
    prices: Vec<[f64; 2]>,
    total_volumes: Vec<[f64; 2]>,
}

/// CoinGecko historical data client with a per-(instrument, days) TTL cache.
pub struct CoinGeckoClient {
    client: Client,
    api_key: Option<String>,
    cache: Cache<Arc<Vec<PricePoint>>>,
}

impl CoinGeckoClient {
    /// Create a new CoinGecko client.
    pub fn new(api_key: Option<String>, cache_ttl: Duration) -> Self {
        let client = Client::builder()
            .user_agent("Sonify/1.0 (Market Data Sonification)")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            cache: Cache::new(cache_ttl),
        }
    }

    fn base_url(&self) -> &str {
        if self.api_key.is_some() {
            COINGECKO_PRO_API_URL
        } else {
            COINGECKO_API_URL
        }
    }

    /// Resolve an instrument symbol to its CoinGecko ID.
    pub fn coin_id(instrument: &str) -> Option<&'static str> {
        let lower = instrument.to_lowercase();
        SYMBOL_TO_ID
            .iter()
            .find(|(symbol, _)| *symbol == lower)
            .map(|(_, id)| *id)
    }

    /// Fetch the price/volume series for an instrument over a lookback
    /// window. Provider failure is fatal to the request; there is no retry.
    pub async fn fetch_history(&self, instrument: &str, days: u32) -> Result<Arc<Vec<PricePoint>>> {
        let coin_id = Self::coin_id(instrument).ok_or_else(|| {
            AppError::NotFound(format!("unsupported instrument: {}", instrument))
        })?;

        let cache_key = format!("{}:{}", coin_id, days);
        if let Some(series) = self.cache.get(&cache_key) {
            debug!("history cache hit for {}", cache_key);
            return Ok(series);
        }

        let interval = if days > 7 { "daily" } else { "hourly" };
        let mut url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval={}",
            self.base_url(),
            coin_id,
            days,
            interval
        );
        if let Some(ref key) = self.api_key {
            url.push_str(&format!("&x_cg_pro_api_key={}", key));
        }

        info!("Fetching CoinGecko history for {} ({}d)", instrument, days);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(
                "CoinGecko API returned {}: {}",
                status,
                &text[..text.len().min(200)]
            );
            return Err(AppError::ExternalApi(format!(
                "CoinGecko API error: {}",
                status
            )));
        }

        let chart: CoinGeckoMarketChart = response.json().await?;
        let series = Arc::new(chart_to_series(&chart));

        if series.is_empty() {
            return Err(AppError::ExternalApi(format!(
                "no price data returned for {}",
                instrument
            )));
        }

        self.cache.set(cache_key, series.clone());
        Ok(series)
    }
}

/// Convert the parallel chart arrays into a clean series. Samples with a
/// non-positive price are dropped; a missing volume entry reads as zero.
fn chart_to_series(chart: &CoinGeckoMarketChart) -> Vec<PricePoint> {
    chart
        .prices
        .iter()
        .enumerate()
        .filter(|(_, price)| price[1] > 0.0)
        .map(|(i, price)| PricePoint {
            timestamp_ms: price[0] as i64,
            price: price[1],
            volume: chart
                .total_volumes
                .get(i)
                .map(|v| v[1].max(0.0))
                .unwrap_or(0.0),
        })
        .collect()
}
