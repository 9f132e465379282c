use axum::{extract::State, routing::post, Json, Router};
use panwa_shared::{Masked, Session};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Privacy-policy acknowledgement; sign-in is refused without it.
    #[serde(default)]
    pub consent: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/password-reset", post(password_reset))
        .route("/v1/auth/oauth/thaiid", post(oauth_thaiid))
}

/// POST /v1/auth/login
/// Password sign-in, delegated to the hosted auth service.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    // 1. Synchronous validation before any network call
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    if !req.consent {
        return Err(AppError::ValidationError(
            "Please accept the privacy policy".to_string(),
        ));
    }

    // 2. Delegate to the provider; its failures surface as 401 with the
    //    provider's own message
    let session = state
        .auth_provider
        .sign_in(&req.email, &req.password)
        .await
        .map_err(|e| AppError::AuthenticationError(e.to_string()))?;

    tracing::info!(email = %Masked(&req.email), "sign-in succeeded");
    Ok(Json(session))
}

/// POST /v1/auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<Session>, AppError> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session = state
        .auth_provider
        .sign_up(&req.email, &req.password)
        .await
        .map_err(|e| AppError::ConflictError(e.to_string()))?;

    tracing::info!(email = %Masked(&req.email), "account created");
    Ok(Json(session))
}

/// POST /v1/auth/password-reset
/// The reset flow is not built yet; the page says so instead of failing.
async fn password_reset() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Password reset is under development. Please contact support.",
    }))
}

/// POST /v1/auth/oauth/thaiid
async fn oauth_thaiid(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    state
        .oauth
        .begin_sign_in()
        .await
        .map(Json)
        .map_err(|e| AppError::NotImplemented(e.to_string()))
}
