//! Route handlers

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use tracing::debug;

use super::AppState;
use super::error::ApiError;
use super::models::{
    BoostRequest, BoostResponse, CategoriesResponse, CategoryInfo, GenerateRequest, GenerateResponse, HealthResponse,
    RootResponse, StatsResponse,
};
use crate::categorize::Category;

pub const SERVICE_NAME: &str = "CreativeFuse Backend";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> Json<RootResponse> {
    let endpoints = [
        ("boost", "POST /boost"),
        ("generate", "POST /generate"),
        ("health", "GET /health"),
        ("stats", "GET /stats"),
        ("categories", "GET /categories"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(RootResponse {
        message: "Welcome to CreativeFuse Backend API".to_string(),
        version: API_VERSION.to_string(),
        endpoints,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
        model: state.service.model().to_string(),
        features: ["idea_boost", "idea_generation", "categorization", "usage_stats"]
            .into_iter()
            .map(String::from)
            .collect(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn boost(
    State(state): State<AppState>,
    payload: Result<Json<BoostRequest>, JsonRejection>,
) -> Result<Json<BoostResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::bad_json)?;
    debug!(idea_len = request.idea.len(), "boost handler: called");

    let outcome = state.service.boost(&request.idea).await.map_err(ApiError::boost)?;
    Ok(Json(BoostResponse::from(outcome)))
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::bad_json)?;
    debug!(domain = %request.domain, "generate handler: called");

    let idea = state
        .service
        .generate(&request.domain, &request.keywords, &request.style)
        .await
        .map_err(ApiError::generate)?;
    Ok(Json(GenerateResponse { idea }))
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.stats().snapshot()))
}

pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::ALL.into_iter().map(CategoryInfo::from).collect(),
    })
}
