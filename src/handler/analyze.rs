use std::time::Instant;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::analyze_feed;
use crate::domain::{AnalyzeResponse, ValidationError, parse_feed_request};

/// Window size rejected as unsupported in the current version.
pub const UNSUPPORTED_TIME_WINDOW_MINUTES: i64 = 123;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    code: &'static str,
}

/// Failures surfaced to API clients.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ValidationError),
    UnsupportedTimeWindow(i64),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid input format or constraints violation",
                    code: "BAD_REQUEST",
                },
            ),
            Self::UnsupportedTimeWindow(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "Valor de janela temporal não suportado na versão atual",
                    code: "UNSUPPORTED_TIME_WINDOW",
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Handler for POST /analyze-feed
pub async fn analyze_feed_handler(body: String) -> Result<Json<AnalyzeResponse>, ApiError> {
    let started = Instant::now();
    info!(
        "Received analyze-feed request with body length: {}",
        body.len()
    );

    let request = parse_feed_request(&body).inspect_err(|e| {
        warn!("Rejected analyze-feed payload: {e}");
    })?;

    if request.time_window_minutes == UNSUPPORTED_TIME_WINDOW_MINUTES {
        warn!(
            time_window_minutes = request.time_window_minutes,
            "Unsupported time window requested"
        );
        return Err(ApiError::UnsupportedTimeWindow(request.time_window_minutes));
    }

    // validated positive above; anything past u32 is far beyond any feed's span
    let window = u32::try_from(request.time_window_minutes).unwrap_or(u32::MAX);
    let analysis = analyze_feed(&request.messages, window, started);

    info!(
        messages = request.messages.len(),
        processing_time_ms = analysis.processing_time_ms,
        "Analyzed feed"
    );
    Ok(Json(AnalyzeResponse { analysis }))
}
