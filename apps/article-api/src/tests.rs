use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use rag_core::{
    CompletionRequest, InMemoryStore, ModelProvider, ModelTier, PipelineConfig, ProviderError,
    VectorRecord,
};
use serde_json::{json, Value};

use crate::app;
use crate::state::AppState;

/// Provider that answers planning with a fixed outline, or fails it
struct StubProvider {
    fail_planning: bool,
}

#[async_trait]
impl ModelProvider for StubProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        Ok(vec![1.0, 0.0])
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let prompt = &request.messages[0].content;
        if prompt.contains("JSON array of section titles") {
            if self.fail_planning {
                return Err(ProviderError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                });
            }
            return Ok(r#"["Intro", "History"]"#.to_string());
        }
        match request.tier {
            ModelTier::Fast => Ok("draft [1]".to_string()),
            ModelTier::Accurate => Ok("refined [1]".to_string()),
        }
    }
}

fn test_server(fail_planning: bool) -> TestServer {
    let store = InMemoryStore::new(vec![VectorRecord {
        id: "owt_1".to_string(),
        title: "OpenWebText".to_string(),
        text: "Some corpus text.".to_string(),
        embedding: vec![1.0, 0.0],
    }]);
    let state = AppState::new(
        Arc::new(StubProvider { fail_planning }),
        Arc::new(store),
        PipelineConfig::default(),
    );
    TestServer::new(app(Arc::new(state))).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server(false);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "article-api");
}

#[tokio::test]
async fn test_generate_article_renders_sections_in_order() {
    let server = test_server(false);

    let response = server
        .post("/api/generate-article")
        .json(&json!({ "topic": "Cats" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(
        json["article"],
        "## Intro\n\nrefined [1]\n\n## History\n\nrefined [1]"
    );
}

#[tokio::test]
async fn test_missing_topic_is_rejected() {
    let server = test_server(false);

    let bodies = [
        json!({}),
        json!({ "topic": "" }),
        json!({ "topic": null }),
        json!({ "topic": 42 }),
    ];
    for body in bodies {
        let response = server.post("/api/generate-article").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "Missing topic" }));
    }
}

#[tokio::test]
async fn test_non_json_body_is_missing_topic() {
    let server = test_server(false);

    let response = server.post("/api/generate-article").text("topic=Cats").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": "Missing topic" }));
}

#[tokio::test]
async fn test_planning_failure_is_internal_error() {
    let server = test_server(true);

    let response = server
        .post("/api/generate-article")
        .json(&json!({ "topic": "Cats" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    // Provider details stay in the logs
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to generate article" })
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = test_server(false);

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}
