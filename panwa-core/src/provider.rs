use async_trait::async_trait;
use panwa_shared::{
    NewReservation, NewVerification, Reservation, Session, Store, User, VerificationRecord,
};
use uuid::Uuid;

pub type ProviderResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Repository trait for store (point-of-interest) data access
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Fetch every row of the `stores` relation in one call. The map page
    /// holds the result in memory; there is no pagination.
    async fn fetch_stores(&self) -> ProviderResult<Vec<Store>>;
}

/// Repository trait for reservation data access
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert one reservation row. The status column is left to the server
    /// default; no idempotency key accompanies the call.
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
        access_token: Option<&str>,
    ) -> ProviderResult<Reservation>;

    /// List the caller's reservations, newest first.
    async fn list_reservations(&self, access_token: &str) -> ProviderResult<Vec<Reservation>>;
}

/// Repository trait for verification data access
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    async fn insert_verification(
        &self,
        record: &NewVerification,
        access_token: &str,
    ) -> ProviderResult<VerificationRecord>;

    /// The newest verification row for a user, if any.
    async fn latest_verification(
        &self,
        user_id: Uuid,
        access_token: &str,
    ) -> ProviderResult<Option<VerificationRecord>>;
}

/// Object storage capability (one bucket per concern on the provider side).
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
        access_token: &str,
    ) -> ProviderResult<()>;
}

/// Session and credential operations delegated to the hosted auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<Session>;

    async fn sign_up(&self, email: &str, password: &str) -> ProviderResult<Session>;

    /// Resolve the user behind an access token.
    async fn get_user(&self, access_token: &str) -> ProviderResult<User>;
}
