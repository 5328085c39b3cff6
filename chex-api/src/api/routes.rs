use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use chex_core::{FactCheckResult, FactChecker};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::api::message::{ClaimRequest, HealthResponse};
use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<dyn FactChecker>,
}

pub fn build_router(checker: Arc<dyn FactChecker>, config: &ServerConfig) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .with_context(|| format!("invalid allowed origin: {}", config.allowed_origin))?;

    // a list only grants matching origins; a bare value is sent to everyone
    // credentials rule out `*`, so methods and headers are echoed back instead
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Ok(Router::new()
        .route("/", get(health))
        .route("/fact-check", post(fact_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(AppState { checker }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "fact-check service running".to_string(),
    })
}

async fn fact_check(
    State(state): State<AppState>,
    Json(request): Json<ClaimRequest>,
) -> Json<FactCheckResult> {
    let request_id = Uuid::new_v4();
    let span = info_span!("fact_check", %request_id);
    async move {
        info!(raw_claim = %request.claim, "received claim");
        Json(state.checker.check(&request.claim).await)
    }
    .instrument(span)
    .await
}
