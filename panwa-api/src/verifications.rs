use axum::{
    extract::{DefaultBodyLimit, Extension, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use panwa_verify::{
    DocumentFile, DocumentType, SubmissionFlow, SubmitError, VerificationStatusView,
};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::auth::{require_auth, AuthSession};
use crate::state::AppState;

/// Accept bodies above the document cap so oversize files are rejected by
/// the validation rules (with their message) rather than by the framework.
const UPLOAD_BODY_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub verification: VerificationStatusView,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub verification: Option<VerificationStatusView>,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/verifications", post(submit))
        .route("/v1/verifications/status", get(status))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth))
}

/// POST /v1/verifications (multipart: document_type, consent, document)
/// Upload one identity document and record the pending review request.
async fn submit(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    mut multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    // 1. Collect the form fields
    let mut document_type: Option<DocumentType> = None;
    let mut consent = false;
    let mut file: Option<DocumentFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "document_type" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                document_type = DocumentType::parse(&value);
            }
            "consent" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                consent = matches!(value.as_str(), "true" | "on" | "1");
            }
            "document" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                file = Some(DocumentFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let document_type = document_type
        .ok_or_else(|| AppError::ValidationError("Please select a document type".to_string()))?;
    let file =
        file.ok_or_else(|| AppError::ValidationError("Please upload exactly one file".to_string()))?;

    // 2. Validate and run the upload-then-record flow
    let user_id = session
        .user_id()
        .map_err(|_| AppError::AuthenticationError("Invalid session".to_string()))?;
    let flow = SubmissionFlow::new(state.storage.as_ref(), state.verifications.as_ref());

    let record = flow
        .submit(
            user_id,
            &session.access_token,
            document_type,
            file,
            consent,
            chrono::Utc::now().timestamp_millis(),
        )
        .await
        .map_err(|err| match err {
            SubmitError::Rejected(_) | SubmitError::ConsentRequired => {
                AppError::ValidationError(err.to_string())
            }
            SubmitError::Upload(_) | SubmitError::Record(_) => AppError::UpstreamError(
                "Failed to upload document. Please try again.".to_string(),
            ),
        })?;

    Ok(Json(SubmitResponse {
        message: "Document uploaded successfully",
        verification: VerificationStatusView::from(&record),
    }))
}

/// GET /v1/verifications/status
/// The newest review request for the caller, read once per page load.
async fn status(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<StatusResponse>, AppError> {
    let user_id = session
        .user_id()
        .map_err(|_| AppError::AuthenticationError("Invalid session".to_string()))?;

    let record = state
        .verifications
        .latest_verification(user_id, &session.access_token)
        .await
        .map_err(|e| AppError::UpstreamError(format!("Error fetching verification: {e}")))?;

    Ok(Json(StatusResponse {
        verification: record.as_ref().map(VerificationStatusView::from),
    }))
}
