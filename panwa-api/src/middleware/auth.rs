use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// Claims carried by a provider-issued access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub exp: usize,
}

/// The verified session a protected handler works with.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub claims: Claims,
    pub access_token: String,
}

impl AuthSession {
    /// The authenticated user's id. Provider subjects are always uuids.
    pub fn user_id(&self) -> Result<Uuid, StatusCode> {
        Uuid::parse_str(&self.claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)
    }
}

/// Decode and verify an access token against the provider's signing secret.
pub fn decode_session(state: &AppState, token: &str) -> Result<AuthSession, StatusCode> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)?;

    Ok(AuthSession {
        claims: token_data.claims,
        access_token: token.to_string(),
    })
}

/// Requires a valid session and injects it into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // 1. Extract token from Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // 2. Decode and validate the provider JWT
    let session = decode_session(&state, token)?;

    // 3. Inject session into request extensions
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
