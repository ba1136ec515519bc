use crate::error::{AppError, Result};
use crate::services::{analyze_series, DEFAULT_SPIKE_THRESHOLD};
use crate::sources::elevenlabs::build_prompt;
use crate::sources::RenderedAudio;
use crate::types::{
    validate_series, AnalysisReport, FeatureSummary, MusicParameters, PricePoint, StylePreset,
};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonifyRequest {
    pub instrument: String,
    pub preset: StylePreset,
    pub days: Option<u32>,
    pub spike_threshold: Option<f64>,
    /// When set, also render audio and include the artifact reference.
    #[serde(default)]
    pub render: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonifySeriesRequest {
    pub series: Vec<PricePoint>,
    pub preset: StylePreset,
    pub spike_threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SonifyResponse {
    pub instrument: Option<String>,
    pub preset: StylePreset,
    pub analysis: AnalysisReport,
    pub parameters: MusicParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<RenderedAudio>,
}

/// Run the full pipeline over a series: analyze, summarize, map, and
/// (always) validate.
async fn run_pipeline(
    state: &AppState,
    series: &[PricePoint],
    preset: StylePreset,
    spike_threshold: Option<f64>,
) -> Result<(AnalysisReport, FeatureSummary, MusicParameters)> {
    let threshold = spike_threshold.unwrap_or(DEFAULT_SPIKE_THRESHOLD);
    let report = analyze_series(series, threshold)?;
    let summary = FeatureSummary::new(series, &report, preset);
    let parameters = state.mapper.map(&summary).await;
    Ok((report, summary, parameters))
}

/// POST /api/sonify
async fn sonify(
    State(state): State<AppState>,
    Json(request): Json<SonifyRequest>,
) -> Result<Json<SonifyResponse>> {
    let days = request.days.unwrap_or(state.config.default_history_days);
    let series = state
        .history_client
        .fetch_history(&request.instrument, days)
        .await?;

    let (analysis, summary, parameters) =
        run_pipeline(&state, &series, request.preset, request.spike_threshold).await?;

    let audio = if request.render {
        let render_client = state.render_client.as_ref().ok_or_else(|| {
            AppError::BadRequest("audio rendering is not configured".to_string())
        })?;
        let prompt = build_prompt(&summary, &parameters);
        Some(render_client.render_default(&prompt).await?)
    } else {
        None
    };

    debug!(
        "sonified {} ({}): tempo {} sentiment {}",
        request.instrument,
        request.preset.as_str(),
        parameters.tempo,
        analysis.sentiment.as_str()
    );

    Ok(Json(SonifyResponse {
        instrument: Some(request.instrument.to_lowercase()),
        preset: request.preset,
        analysis,
        parameters,
        audio,
    }))
}

/// POST /api/sonify/series - same pipeline over a caller-supplied series.
async fn sonify_series(
    State(state): State<AppState>,
    Json(request): Json<SonifySeriesRequest>,
) -> Result<Json<SonifyResponse>> {
    validate_series(&request.series)?;

    let (analysis, _, parameters) = run_pipeline(
        &state,
        &request.series,
        request.preset,
        request.spike_threshold,
    )
    .await?;

    Ok(Json(SonifyResponse {
        instrument: None,
        preset: request.preset,
        analysis,
        parameters,
        audio: None,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sonify))
        .route("/series", post(sonify_series))
}
