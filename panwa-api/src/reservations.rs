use axum::{
    extract::{Extension, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use chrono::NaiveDate;
use panwa_shared::Reservation;
use panwa_travel::search::BookingKind;
use panwa_travel::{Offer, Quote, SearchForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{from_wizard, AppError};
use crate::middleware::auth::{decode_session, require_auth, AuthSession};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub kind: BookingKind,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    /// Re-running a search inside an existing wizard replaces its results.
    pub wizard_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub wizard_id: Uuid,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub wizard_id: Uuid,
    pub offer_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub offer: Offer,
    pub quote: Quote,
}

#[derive(Debug, Deserialize)]
pub struct WizardRequest {
    pub wizard_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub reservation: Reservation,
    pub message: &'static str,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/v1/reservations", get(list_reservations))
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/v1/reservations/search", post(search))
        .route("/v1/reservations/select", post(select))
        .route("/v1/reservations/confirm", post(confirm))
        .route("/v1/reservations/back", post(back))
        .merge(protected)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/reservations/search
/// Validate the search form and replace the wizard's result set with the
/// demo offers.
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let mut form = SearchForm::new();
    form.kind = req.kind;
    form.destination = req.destination;
    form.set_departure_date(req.departure_date);
    form.set_return_date(req.return_date)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    if let Some(adults) = req.adults {
        form.adults = adults;
    }
    if let Some(children) = req.children {
        form.children = children;
    }

    let wizard_id = req.wizard_id.unwrap_or_else(Uuid::new_v4);
    let mut wizards = state.wizards.lock().await;
    let wizard = wizards.entry(wizard_id).or_default();
    let offers = wizard.submit_search(&form).map_err(from_wizard)?.to_vec();

    tracing::info!(%wizard_id, results = offers.len(), "search complete");
    Ok(Json(SearchResponse { wizard_id, offers }))
}

/// POST /v1/reservations/select
/// Pick one offer; the wizard moves to the details step.
async fn select(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, AppError> {
    let mut wizards = state.wizards.lock().await;
    let wizard = wizards
        .get_mut(&req.wizard_id)
        .ok_or_else(|| AppError::NotFoundError("Unknown wizard".to_string()))?;

    let offer = wizard.select_offer(req.offer_id).map_err(from_wizard)?.clone();
    let quote = Quote::for_price(offer.price);
    Ok(Json(SelectResponse { offer, quote }))
}

/// POST /v1/reservations/confirm
/// One insert against the provider. The wizard's in-flight flag rejects
/// re-entrant confirms; no idempotency key accompanies the call, so a lost
/// response can still duplicate the booking on retry.
async fn confirm(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(req): Json<WizardRequest>,
) -> Result<Json<ConfirmResponse>, AppError> {
    // 1. An attached session is optional but must be valid when present.
    let session = match &bearer {
        Some(TypedHeader(Authorization(bearer))) => Some(
            decode_session(&state, bearer.token())
                .map_err(|_| AppError::AuthenticationError("Invalid session".to_string()))?,
        ),
        None => None,
    };

    // 2. Build the insert payload and mark the wizard in-flight.
    let mut payload = {
        let mut wizards = state.wizards.lock().await;
        let wizard = wizards
            .get_mut(&req.wizard_id)
            .ok_or_else(|| AppError::NotFoundError("Unknown wizard".to_string()))?;
        wizard.begin_confirm().map_err(from_wizard)?
    };
    if let Some(session) = &session {
        payload.user_id = session.user_id().ok();
    }

    // 3. Single provider insert, awaited without holding the wizard lock.
    let token = session.as_ref().map(|s| s.access_token.as_str());
    let result = state.reservations.insert_reservation(&payload, token).await;

    // 4. Settle the wizard.
    let mut wizards = state.wizards.lock().await;
    let wizard = wizards
        .get_mut(&req.wizard_id)
        .ok_or_else(|| AppError::InternalServerError("Wizard vanished mid-confirm".to_string()))?;

    match result {
        Ok(reservation) => {
            wizard.confirm_succeeded().map_err(from_wizard)?;
            tracing::info!(
                reference = reservation.booking_reference.as_deref().unwrap_or("-"),
                "booking confirmed"
            );
            Ok(Json(ConfirmResponse {
                reservation,
                message: "Your booking has been confirmed.",
            }))
        }
        Err(err) => {
            wizard.confirm_failed();
            Err(AppError::UpstreamError(format!("Booking failed: {err}")))
        }
    }
}

/// POST /v1/reservations/back
async fn back(
    State(state): State<AppState>,
    Json(req): Json<WizardRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut wizards = state.wizards.lock().await;
    let wizard = wizards
        .get_mut(&req.wizard_id)
        .ok_or_else(|| AppError::NotFoundError("Unknown wizard".to_string()))?;
    wizard.back().map_err(from_wizard)?;
    Ok(Json(serde_json::json!({ "step": "search" })))
}

/// GET /v1/reservations
/// The caller's bookings, newest first.
async fn list_reservations(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    state
        .reservations
        .list_reservations(&session.access_token)
        .await
        .map(Json)
        .map_err(|e| AppError::UpstreamError(format!("Error fetching reservations: {e}")))
}
