use crate::error::Result;
use crate::types::PricePoint;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Lookback window in days; falls back to the configured default.
    pub days: Option<u32>,
}

/// Aggregate stats alongside the raw points.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub current_price: f64,
    pub total_change_percent: f64,
    pub average_volume: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub instrument: String,
    pub days: u32,
    pub points: Vec<PricePoint>,
    pub summary: HistorySummary,
}

/// GET /api/market/:instrument/history
async fn get_history(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>> {
    let days = query.days.unwrap_or(state.config.default_history_days);
    let series = state.history_client.fetch_history(&instrument, days).await?;

    let first = series.first().map(|p| p.price).unwrap_or(0.0);
    let last = series.last().map(|p| p.price).unwrap_or(0.0);
    let summary = HistorySummary {
        current_price: last,
        total_change_percent: if first > 0.0 {
            ((last - first) / first) * 100.0
        } else {
            0.0
        },
        average_volume: if series.is_empty() {
            0.0
        } else {
            series.iter().map(|p| p.volume).sum::<f64>() / series.len() as f64
        },
    };

    Ok(Json(HistoryResponse {
        instrument: instrument.to_lowercase(),
        days,
        points: series.as_ref().clone(),
        summary,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/:instrument/history", get(get_history))
}
