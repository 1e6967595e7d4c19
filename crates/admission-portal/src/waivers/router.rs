use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;

use super::domain::StudentRecord;
use super::evaluation::{EligibilitySummary, WaiverEngine};

/// Router exposing the waiver evaluation endpoints.
pub fn waiver_router(engine: Arc<WaiverEngine>) -> Router {
    Router::new()
        .route("/api/v1/waivers/evaluate", post(evaluate_handler))
        .route("/api/v1/waivers/faculties", get(faculties_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<WaiverEngine>>,
    Json(student): Json<StudentRecord>,
) -> Result<Json<EligibilitySummary>, AppError> {
    student.validate()?;

    let summary = engine.summarize(&student);
    debug!(
        faculty = %student.faculty,
        awards = summary.awards.len(),
        max_waiver_percent = summary.max_waiver_percent,
        "waiver evaluation served"
    );

    Ok(Json(summary))
}

pub(crate) async fn faculties_handler(State(engine): State<Arc<WaiverEngine>>) -> Response {
    let faculties: Vec<&str> = engine
        .schedule()
        .faculties()
        .map(|faculty| faculty.as_str())
        .collect();

    (StatusCode::OK, Json(json!({ "faculties": faculties }))).into_response()
}
