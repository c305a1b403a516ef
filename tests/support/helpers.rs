// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Response, StatusCode};
use serde_json::Value;

use notelify_articles::application::services::ApplicationServices;
use notelify_articles::domain::article::ArticleRepository;
use notelify_articles::infrastructure::repositories::InMemoryArticleRepository;
use notelify_articles::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{CapturingLogSink, SequentialIds, SteppingClock};

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub logs: Arc<CapturingLogSink>,
}

pub fn build_services_with(repo: Arc<dyn ArticleRepository>) -> TestApp {
    let logs = Arc::new(CapturingLogSink::default());
    let services = Arc::new(ApplicationServices::new(
        repo,
        Arc::new(SequentialIds::default()),
        Arc::new(SteppingClock::default()),
        logs.clone(),
    ));
    TestApp { services, logs }
}

pub fn build_services() -> TestApp {
    build_services_with(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router() -> axum::Router {
    let app = build_services();
    build_router(
        HttpState {
            services: app.services,
        },
        &["*".to_string()],
    )
}

pub async fn read_json(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, value)
}

/// Asserts the `{error, message}` error payload and returns the message.
pub async fn assert_error_response(resp: Response<Body>, expected: StatusCode) -> String {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    assert_eq!(
        json["error"].as_str(),
        expected.canonical_reason(),
        "unexpected error field: {json}"
    );
    json["message"]
        .as_str()
        .expect("message field present")
        .to_string()
}
