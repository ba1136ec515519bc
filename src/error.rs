use crate::services::DataError;
use crate::types::SeriesValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid market data: {0}")]
    Data(#[from] DataError),

    #[error("Invalid series: {0}")]
    Series(#[from] SeriesValidationError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Data(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Series(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Reqwest(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Anyhow(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_converts() {
        let err: AppError = DataError::EmptySeries.into();
        assert!(matches!(err, AppError::Data(DataError::EmptySeries)));
    }

    #[test]
    fn test_series_error_converts() {
        let err: AppError = SeriesValidationError::Empty.into();
        assert!(matches!(err, AppError::Series(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::NotFound("unsupported instrument: XYZ".into()).to_string(),
            "Not found: unsupported instrument: XYZ"
        );
        assert!(AppError::Data(DataError::EmptySeries)
            .to_string()
            .contains("no price data"));
    }
}
