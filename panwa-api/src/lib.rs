use axum::{
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod error;
pub mod freelance;
pub mod home;
pub mod marketplace;
pub mod middleware;
pub mod reservations;
pub mod state;
pub mod stores;
pub mod verifications;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(home::routes())
        .merge(auth::routes())
        .merge(reservations::routes(state.clone()))
        .merge(stores::routes())
        .merge(verifications::routes(state.clone()))
        .merge(marketplace::routes())
        .merge(freelance::routes())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Catch-all for unmatched routes; every page fails independently and the
/// rest of the navigation stays usable.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
