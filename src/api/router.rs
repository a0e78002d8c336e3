//! Recommendation API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The client app is served from a different origin, so CORS is
//! permissive, matching the original deployment's allow-any policy.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, HealthResponse, RecommendRequest, SymptomsResponse};
use crate::config;
use crate::engine::{Engine, Recommendation};

/// Build the service router.
pub fn api_router(engine: Arc<Engine>) -> Router {
    let ctx = ApiContext::new(engine);
    Router::new()
        .route("/recommend", post(recommend))
        .route("/health", get(health))
        .route("/symptoms", get(symptoms))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

/// `POST /recommend` — the full encode → classify → aggregate pipeline.
async fn recommend(
    State(ctx): State<ApiContext>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let recommendation = ctx.engine.recommend(&request.symptoms)?;
    tracing::debug!(
        disease = %recommendation.disease,
        symptoms = request.symptoms.len(),
        "recommendation served"
    );
    Ok(Json(recommendation))
}

/// `GET /health` — readiness check with loaded-data counts.
async fn health(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        symptoms: ctx.engine.vocabulary().len(),
        diseases: ctx.engine.labels().len(),
    })
}

/// `GET /symptoms` — the closed vocabulary, for client input pickers.
async fn symptoms(State(ctx): State<ApiContext>) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: ctx.engine.vocabulary().names().collect(),
    })
}
