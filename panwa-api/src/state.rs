use panwa_core::{
    AuthProvider, OAuthProvider, ObjectStorage, ReservationRepository, StoreRepository,
    VerificationRepository,
};
use panwa_places::MapTokenStore;
use panwa_travel::ReservationWizard;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<dyn StoreRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub verifications: Arc<dyn VerificationRepository>,
    pub storage: Arc<dyn ObjectStorage>,
    pub auth_provider: Arc<dyn AuthProvider>,
    pub oauth: Arc<dyn OAuthProvider>,
    /// Booking wizards keyed by the id issued at search time.
    pub wizards: Arc<Mutex<HashMap<Uuid, ReservationWizard>>>,
    pub map_tokens: Arc<MapTokenStore>,
    pub auth: AuthConfig,
}
