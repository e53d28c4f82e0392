//! Error types for the article API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rag_core::RagError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing topic")]
    MissingTopic,

    #[error("Failed to generate article: {0}")]
    Generation(#[from] RagError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingTopic => (StatusCode::BAD_REQUEST, "Missing topic"),
            ApiError::Generation(e) => {
                tracing::error!("Article generation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate article")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
