//! HTTP API handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::prompt::{error_message, PromptGenerator};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Prompt pipeline.
    pub generator: PromptGenerator,
    /// Volume flag used when the request does not set one.
    pub default_include_volume: bool,
    /// Prometheus exporter handle, absent when no recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state.
    pub fn new(generator: PromptGenerator, default_include_volume: bool) -> Self {
        Self {
            generator,
            default_include_volume,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Query string of the prompt endpoint.
#[derive(Debug, Deserialize)]
pub struct PromptQuery {
    /// Polymarket event URL.
    pub url: String,
    /// Include per-market volume lines.
    pub include_volume: Option<bool>,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prompt handler - returns the prompt as plain text.
///
/// Failures return the same "Error generating prompt: …" text with a status
/// matching the error kind.
pub async fn prompt(State(state): State<AppState>, Query(query): Query<PromptQuery>) -> Response {
    let include_volume = query.include_volume.unwrap_or(state.default_include_volume);

    match state.generator.try_generate(&query.url, include_volume).await {
        Ok(prompt) => (StatusCode::OK, prompt).into_response(),
        Err(e) => (status_for(e.kind()), error_message(&e)).into_response(),
    }
}

/// Metrics handler - Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// HTTP status for a failed generation.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Network | ErrorKind::Decode => StatusCode::BAD_GATEWAY,
    }
}
