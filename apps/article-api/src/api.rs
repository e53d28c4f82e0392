//! API handlers for the article server

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "article-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Generated article
#[derive(Debug, Serialize)]
pub struct GenerateArticleResponse {
    pub article: String,
}

/// Topic from the request body when it is a non-empty string
///
/// Absent, null, empty, non-string and unparseable bodies all count as a
/// missing topic.
pub fn topic_from(payload: Result<Json<Value>, JsonRejection>) -> Option<String> {
    let Json(body) = payload.ok()?;
    match body.get("topic")? {
        Value::String(topic) if !topic.is_empty() => Some(topic.clone()),
        _ => None,
    }
}

/// Handler: POST /api/generate-article
pub async fn handle_generate_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateArticleResponse>, ApiError> {
    if let Err(rejection) = &payload {
        debug!("Unreadable request body: {}", rejection);
    }
    let topic = topic_from(payload).ok_or(ApiError::MissingTopic)?;
    info!("Generate article: topic='{}'", topic);

    let article = state.assembler.assemble(&topic).await?;

    Ok(Json(GenerateArticleResponse {
        article: article.render(),
    }))
}
