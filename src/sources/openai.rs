//! Reasoning provider backed by an OpenAI-compatible chat completion API.

use crate::services::ReasoningProvider;
use crate::types::FeatureSummary;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are an expert music producer mapping market \
data to music parameters. Higher volatility means faster tempo and denser \
percussion; rising prices mean major scale and brighter timbre; falling \
prices mean minor scale and darker timbre; spikes and strong momentum raise \
intensity. Return ONLY a JSON object with exactly these fields: tempo \
(60-180), scale (\"major\"|\"minor\"), key (pitch name like \"C\"), \
filterCutoff, brightness, drumDensity, intensity, energyScore (each 0.0-1.0), \
trendDirection (\"rising\"|\"falling\"|\"stable\"), trendStrength (0.0-1.0).";

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// OpenAI-backed reasoning client.
pub struct OpenAiReasoningClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiReasoningClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    fn user_prompt(summary: &FeatureSummary) -> String {
        format!(
            "Map this market data to music parameters:\n\
             Current price: {:.2}\nTotal change: {:+.2}%\n\
             Trend: {} (strength {:.2})\nVolatility: {} (avg {:.2}%)\n\
             Volume trend: {}\nMomentum: {:.2}\nSentiment: {}\n\
             Spikes: {}\nStyle preset: {}",
            summary.current_price,
            summary.total_change_percent,
            summary.trend.direction.as_str(),
            summary.trend.strength,
            summary.volatility.level.as_str(),
            summary.volatility.average,
            summary.volume.trend.as_str(),
            summary.momentum,
            summary.sentiment.as_str(),
            summary.spike_count,
            summary.preset.as_str(),
        )
    }
}

#[async_trait]
impl ReasoningProvider for OpenAiReasoningClient {
    async fn propose(&self, summary: &FeatureSummary) -> anyhow::Result<Value> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::user_prompt(summary)},
            ],
            "response_format": {"type": "json_object"},
            "temperature": 0.7,
            "max_tokens": 300,
        });

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("reasoning request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("reasoning API returned {}", response.status()));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("malformed completion response")?;
        let content = &completion
            .choices
            .first()
            .ok_or_else(|| anyhow!("completion had no choices"))?
            .message
            .content;

        debug!("reasoning candidate: {}", content);
        serde_json::from_str(content).context("candidate was not valid JSON")
    }
}
