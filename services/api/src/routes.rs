use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use permit_wizard::wizard::{sample_record, wizard_router, GenerationPayload, ValidationMode};
use serde_json::json;

pub(crate) fn with_wizard_routes(default_mode: ValidationMode) -> axum::Router {
    wizard_router(default_mode)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/wizard/sample", axum::routing::get(sample_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Sample record as a flat payload; absent in production.
pub(crate) async fn sample_endpoint(
    Extension(state): Extension<AppState>,
) -> axum::response::Response {
    if !state.sample_enabled {
        let payload = json!({ "error": "sample data is disabled in this environment" });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    }
    let payload = GenerationPayload::from(&sample_record());
    (StatusCode::OK, Json(payload)).into_response()
}
