use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::chat::AdmissionAssistant;

/// Router exposing the FAQ, chat, and recommendation endpoints.
pub fn assistant_router(assistant: Arc<AdmissionAssistant>) -> Router {
    Router::new()
        .route("/api/v1/assistant/faq", post(faq_handler))
        .route("/api/v1/assistant/chat", post(chat_handler))
        .route("/api/v1/assistant/recommendations", post(recommend_handler))
        .with_state(assistant)
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaqRequest {
    question: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FaqResponse {
    answer: String,
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    interests: String,
    ssc_gpa: f32,
    hsc_gpa: f32,
}

pub(crate) async fn faq_handler(
    State(assistant): State<Arc<AdmissionAssistant>>,
    axum::Json(request): axum::Json<FaqRequest>,
) -> Response {
    let response = match assistant.best_match(&request.question) {
        Some(found) => FaqResponse {
            answer: found.answer,
            matched: true,
            question: Some(found.question),
            category: Some(found.category),
            stage: Some(found.stage.label()),
        },
        None => FaqResponse {
            answer: assistant.faq_reply(&request.question),
            matched: false,
            question: None,
            category: None,
            stage: None,
        },
    };
    debug!(matched = response.matched, "faq lookup served");

    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn chat_handler(
    State(assistant): State<Arc<AdmissionAssistant>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response {
    let reply = assistant.reply(&request.message);
    debug!("chat message served");

    (StatusCode::OK, axum::Json(json!({ "reply": reply }))).into_response()
}

pub(crate) async fn recommend_handler(
    State(assistant): State<Arc<AdmissionAssistant>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    let recommendations =
        assistant.recommend(&request.interests, request.ssc_gpa, request.hsc_gpa);
    debug!(
        recommendations = recommendations.len(),
        "department recommendations served"
    );

    (
        StatusCode::OK,
        axum::Json(json!({ "recommendations": recommendations })),
    )
        .into_response()
}
