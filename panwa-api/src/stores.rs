use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use panwa_places::{filter_by_category, CATEGORIES};
use panwa_shared::Store;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreListResponse {
    pub stores: Vec<Store>,
    pub count: usize,
    pub categories: Vec<CategoryOption>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SaveTokenRequest {
    pub token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/stores", get(list_stores))
        .route("/v1/map/token", get(get_map_token).put(save_map_token))
}

/// GET /v1/stores?category=
/// All stores in one read, narrowed by the optional category filter. A
/// failed fetch is an error response; nothing is retried.
async fn list_stores(
    State(state): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<StoreListResponse>, AppError> {
    let stores = state.stores.fetch_stores().await.map_err(|e| {
        tracing::error!("Error fetching stores: {}", e);
        AppError::UpstreamError("Could not load store data. Please try again later.".to_string())
    })?;

    let filtered = filter_by_category(&stores, query.category.as_deref());
    Ok(Json(StoreListResponse {
        count: filtered.len(),
        stores: filtered,
        categories: CATEGORIES
            .iter()
            .map(|&(id, label)| CategoryOption { id, label })
            .collect(),
    }))
}

/// GET /v1/map/token
/// The map page is blocked behind this token; a missing one is a setup
/// prompt, not a silent failure.
async fn get_map_token(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let token = state
        .map_tokens
        .load()
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    match token {
        Some(token) => Ok(Json(serde_json::json!({ "token": token }))),
        None => Err(AppError::NotFoundError(
            "No map access token is configured. Enter a public token to enable the map."
                .to_string(),
        )),
    }
}

/// PUT /v1/map/token
async fn save_map_token(
    State(state): State<AppState>,
    Json(req): Json<SaveTokenRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.map_tokens.save(&req.token).map_err(|e| match e {
        panwa_places::TokenStoreError::EmptyToken => AppError::ValidationError(e.to_string()),
        other => AppError::InternalServerError(other.to_string()),
    })?;

    tracing::info!("map access token saved");
    Ok(Json(serde_json::json!({ "message": "Token saved successfully." })))
}
