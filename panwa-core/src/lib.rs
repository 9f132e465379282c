pub mod oauth;
pub mod provider;

pub use oauth::{OAuthProvider, StubThaiIdProvider};
pub use provider::{
    AuthProvider, ObjectStorage, ProviderResult, ReservationRepository, StoreRepository,
    VerificationRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Provider call failed: {0}")]
    ProviderError(String),
    #[error("Sign-in method not available: {0}")]
    NotAvailable(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
