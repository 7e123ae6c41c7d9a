//! Router assembly: HTML and JSON practice endpoints, 404 redirect, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - HTML practice page at `/check_the_box` and `/resources/practice/check_the_box`
/// - JSON API under `/api/v1/...`
/// - Redirect to the resources page for anything else
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // HTML
        .route("/check_the_box", get(http::http_get_practice_page))
        .route("/resources/practice/check_the_box", get(http::http_get_practice_page))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/check_the_box", get(http::http_get_practice_json))
        .fallback(http::http_not_found)
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Settings;
    use crate::seeds::builtin_reference_data;

    fn app() -> Router {
        let state = AppState::new(Settings::default(), builtin_reference_data()).unwrap();
        build_router(Arc::new(state))
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let resp = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_body("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn both_page_paths_render_a_question() {
        for path in ["/check_the_box", "/resources/practice/check_the_box"] {
            let (status, body) = get_body(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains("eligible to check the box?"));
            assert_eq!(body.matches("<details class=\"answer\">").count(), 4);
        }
    }

    #[tokio::test]
    async fn json_api_has_one_correct_answer() {
        let (status, body) = get_body("/api/v1/check_the_box?seed=9").await;
        assert_eq!(status, StatusCode::OK);
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        let answers = v["answers"].as_array().unwrap();
        assert_eq!(answers.len(), 4);
        assert_eq!(answers.iter().filter(|a| a["correct"] == true).count(), 1);
        assert_eq!(answers[0]["slot"], "per_se_negative");
        assert_eq!(v["people"].as_array().unwrap().len(), 2);
        assert!(v["entity"]["jurisdiction"].is_string());
    }

    #[tokio::test]
    async fn seeded_requests_repeat_content() {
        let (_, a) = get_body("/api/v1/check_the_box?seed=31337").await;
        let (_, b) = get_body("/api/v1/check_the_box?seed=31337").await;
        let a: serde_json::Value = serde_json::from_str(&a).unwrap();
        let b: serde_json::Value = serde_json::from_str(&b).unwrap();
        assert_eq!(a["problem"], b["problem"]);
        assert_eq!(a["answers"], b["answers"]);
        assert_ne!(a["id"], b["id"]);
    }

    #[tokio::test]
    async fn unknown_paths_redirect_to_resources() {
        let resp = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            resp.headers()[header::LOCATION],
            "https://www.andrewmitchel.com/resources.php"
        );
    }

    #[tokio::test]
    async fn bad_seed_is_rejected() {
        let (status, _) = get_body("/api/v1/check_the_box?seed=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn broken_data_yields_generic_error_page() {
        let mut settings = Settings::default();
        settings.sampling.max_attempts = 0;
        let state = AppState::new(settings, builtin_reference_data()).unwrap();
        let router = build_router(Arc::new(state));

        // With zero attempts every eligible draw fails; find a seed that takes that path.
        let mut saw_failure = false;
        for seed in 0..20 {
            let resp = router
                .clone()
                .oneshot(Request::builder().uri(format!("/check_the_box?seed={seed}")).body(Body::empty()).unwrap())
                .await
                .unwrap();
            if resp.status() == StatusCode::INTERNAL_SERVER_ERROR {
                let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
                assert!(String::from_utf8_lossy(&bytes).contains("could not be generated"));
                saw_failure = true;
            }
        }
        assert!(saw_failure);
    }

    #[tokio::test]
    async fn broken_data_yields_json_error_body() {
        let mut settings = Settings::default();
        settings.sampling.max_attempts = 0;
        let state = AppState::new(settings, builtin_reference_data()).unwrap();
        let router = build_router(Arc::new(state));

        let mut saw_failure = false;
        for seed in 0..20 {
            let resp = router
                .clone()
                .oneshot(Request::builder().uri(format!("/api/v1/check_the_box?seed={seed}")).body(Body::empty()).unwrap())
                .await
                .unwrap();
            if resp.status() == StatusCode::INTERNAL_SERVER_ERROR {
                let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
                let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
                assert_eq!(v["error"], "could not generate a practice question");
                assert!(v.get("answers").is_none());
                saw_failure = true;
            }
        }
        assert!(saw_failure);
    }
}
