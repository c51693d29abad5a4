//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (active render check)

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use toolscape_core::session::PageState;
use toolscape_critical::StyleCache;
use toolscape_pages::{render_page, RenderParams};

use crate::state::AppState;

/// Readiness report returned by `/readyz`.
#[derive(Debug, Serialize)]
pub struct ReadyStatus {
    pub healthy: bool,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe (active render check).
///
/// Renders the full page against a throwaway cache to verify the pipeline
/// works end to end. Returns 200 with the probe latency if healthy, 503
/// otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let outcome = StyleCache::new(&state.config.style_key)
        .map_err(anyhow::Error::from)
        .and_then(|mut styles| {
            render_page(
                &RenderParams::default(),
                &PageState::default(),
                &state.catalog,
                &mut styles,
            )
            .map_err(anyhow::Error::from)
        });
    let latency_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadyStatus {
                healthy: true,
                latency_ms,
                error: None,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyStatus {
                healthy: false,
                latency_ms,
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}
