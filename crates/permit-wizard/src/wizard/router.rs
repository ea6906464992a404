use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::confirmation::GenerationPayload;
use super::domain::FormRecord;
use super::validation::{validate_record, StepIssues, ValidationMode};

/// Validation request: the flat record plus an optional grading mode.
#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub mode: Option<ValidationMode>,
    #[serde(flatten)]
    pub record: GenerationPayload,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub mode: ValidationMode,
    pub blocking: bool,
    pub steps: Vec<StepIssues>,
}

/// Router exposing the confirmation and validation transforms.
///
/// `default_mode` grades requests that do not name a mode.
pub fn wizard_router(default_mode: ValidationMode) -> Router {
    Router::new()
        .route("/api/v1/wizard/confirmation", post(confirmation_handler))
        .route("/api/v1/wizard/validation", post(validation_handler))
        .with_state(default_mode)
}

pub(crate) async fn confirmation_handler(
    axum::Json(payload): axum::Json<GenerationPayload>,
) -> Response {
    let record = FormRecord::from(payload);
    let view = record.confirmation();
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn validation_handler(
    State(default_mode): State<ValidationMode>,
    axum::Json(request): axum::Json<ValidationRequest>,
) -> Response {
    let mode = request.mode.unwrap_or(default_mode);
    let record = FormRecord::from(request.record);
    let steps = validate_record(&record, mode);
    let blocking = steps
        .iter()
        .flat_map(|entry| entry.issues.iter())
        .any(|issue| issue.blocks());
    debug!(mode = mode.label(), steps = steps.len(), blocking, "record validated");

    let body = ValidationResponse {
        mode,
        blocking,
        steps,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}
