//! HTTP contract of the fact-check service, driven through the router with
//! in-memory collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chex_api::{build_router, ServerConfig};
use chex_core::pipeline::{FailingGenerator, ScriptedGenerator, StaticSearcher};
use chex_core::{ChexError, FactCheckPipeline, FactCheckResult, FactChecker};
use http_body_util::BodyExt;
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:4200";

/// Records the raw claims it receives and answers with a canned record.
struct RecordingChecker {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl FactChecker for RecordingChecker {
    async fn check(&self, raw_claim: &str) -> FactCheckResult {
        self.seen.lock().unwrap().push(raw_claim.to_string());
        FactCheckResult {
            verdict: "REAL".to_string(),
            score: "77".to_string(),
            ..FactCheckResult::default()
        }
    }
}

fn app(checker: Arc<dyn FactChecker>) -> axum::Router {
    build_router(checker, &ServerConfig::default()).unwrap()
}

fn pipeline_app(reply: &str) -> axum::Router {
    app(Arc::new(FactCheckPipeline::new(
        StaticSearcher::new(["Satellite imagery shows the curvature of the Earth"]),
        ScriptedGenerator::new(reply),
    )))
}

fn post_claim(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/fact-check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_acknowledgment() {
    let resp = pipeline_app("")
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["message"], "fact-check service running");
}

#[tokio::test]
async fn fact_check_returns_five_fields() {
    let reply = "Final Verdict: FAKE\nScore: 4\nReasoning: imagery says otherwise\nEvidence: satellite photos\nWarnings:";
    let resp = pipeline_app(reply)
        .oneshot(post_claim(r#"{"claim": "Is the Earth flat?"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({
            "verdict": "FAKE",
            "score": "4",
            "reasoning": "imagery says otherwise",
            "evidence": "satellite photos",
            "warnings": ""
        })
    );
}

#[tokio::test]
async fn model_failure_is_still_ok_status() {
    let router = app(Arc::new(FactCheckPipeline::new(
        StaticSearcher::empty(),
        FailingGenerator::new(|| ChexError::InvalidResponse("no candidates in response".into())),
    )));
    let resp = router
        .oneshot(post_claim(r#"{"claim": "anything"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["verdict"], "UNKNOWN");
    assert_eq!(json["score"], "0");
    assert_eq!(json["reasoning"], "Gemini API call failed.");
    assert_eq!(json["warnings"], "invalid response: no candidates in response");
}

#[tokio::test]
async fn passes_raw_claim_to_checker() {
    let checker = Arc::new(RecordingChecker {
        seen: Mutex::new(Vec::new()),
    });
    let resp = app(checker.clone())
        .oneshot(post_claim(r#"{"claim": "  Is it raining?? "}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["score"], "77");
    assert_eq!(*checker.seen.lock().unwrap(), vec!["  Is it raining?? ".to_string()]);
}

#[tokio::test]
async fn missing_claim_is_rejected() {
    let resp = pipeline_app("")
        .oneshot(post_claim(r#"{"text": "nope"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let resp = pipeline_app("")
        .oneshot(post_claim("{not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preflight_from_allowed_origin() {
    let resp = pipeline_app("")
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/fact-check")
                .header(header::ORIGIN, ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn allowed_origin_is_echoed_on_simple_requests() {
    let resp = pipeline_app("Final Verdict: REAL")
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/fact-check")
                .header(header::ORIGIN, ORIGIN)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"claim": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn other_origins_get_no_cors_grant() {
    let resp = pipeline_app("Final Verdict: REAL")
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/fact-check")
                .header(header::ORIGIN, "https://evil.example")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"claim": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[test]
fn rejects_unusable_origin() {
    let config = ServerConfig {
        allowed_origin: "bad\norigin".to_string(),
        ..ServerConfig::default()
    };
    let checker: Arc<dyn FactChecker> = Arc::new(RecordingChecker {
        seen: Mutex::new(Vec::new()),
    });
    assert!(build_router(checker, &config).is_err());
}
