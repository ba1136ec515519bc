//! Audio rendering via the ElevenLabs music generation API.

use crate::error::{AppError, Result};
use crate::types::{FeatureSummary, MusicParameters};
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1/music-generation";
const RENDER_TIMEOUT_SECS: u64 = 120;
const DEFAULT_DURATION_SECS: u32 = 8;
const PROMPT_INFLUENCE: f64 = 0.7;

/// Reference to a rendered audio artifact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedAudio {
    pub audio_url: String,
    pub filename: String,
    pub duration_secs: u32,
    pub size_bytes: usize,
}

/// ElevenLabs rendering client.
pub struct MusicRenderClient {
    client: Client,
    api_key: String,
    output_dir: PathBuf,
}

impl MusicRenderClient {
    pub fn new(api_key: String, output_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(RENDER_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            output_dir: output_dir.into(),
        }
    }

    /// Render audio for the given description and save it under the output
    /// directory with a fresh filename.
    pub async fn render(&self, prompt: &str, duration_secs: u32) -> Result<RenderedAudio> {
        info!("Rendering audio ({}s): {:.80}", duration_secs, prompt);

        let response = self
            .client
            .post(ELEVENLABS_API_URL)
            .header("xi-api-key", &self.api_key)
            .json(&json!({
                "text": prompt,
                "duration_seconds": duration_secs,
                "prompt_influence": PROMPT_INFLUENCE,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "rendering API returned {}",
                response.status()
            )));
        }

        let audio = response.bytes().await?;
        let filename = format!("audio_{}.mp3", &Uuid::new_v4().simple().to_string()[..8]);
        let filepath = self.output_dir.join(&filename);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::Internal(format!("cannot create audio dir: {}", e)))?;
        tokio::fs::write(&filepath, &audio)
            .await
            .map_err(|e| AppError::Internal(format!("cannot write audio file: {}", e)))?;

        info!("Rendered audio saved: {}", filename);

        Ok(RenderedAudio {
            audio_url: format!("/api/audio/{}", filename),
            filename,
            duration_secs,
            size_bytes: audio.len(),
        })
    }

    /// Render with the default clip length.
    pub async fn render_default(&self, prompt: &str) -> Result<RenderedAudio> {
        self.render(prompt, DEFAULT_DURATION_SECS).await
    }
}

/// Build the textual description handed to the renderer from the feature
/// summary and validated parameters.
pub fn build_prompt(summary: &FeatureSummary, params: &MusicParameters) -> String {
    format!(
        "{} {} track at {} BPM in {} {}, {} mood. Brightness {:.1}, \
         drum density {:.1}, intensity {:.1}. Market is {} with {} volatility.",
        summary.preset.as_str(),
        summary.preset.default_scale().as_str(),
        params.tempo,
        params.key,
        params.scale.as_str(),
        summary.sentiment.as_str(),
        params.brightness,
        params.drum_density,
        params.intensity,
        params.trend_direction.as_str(),
        summary.volatility.level.as_str(),
    )
}
