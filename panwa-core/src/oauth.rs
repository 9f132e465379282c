use async_trait::async_trait;
use panwa_shared::Session;

use crate::provider::ProviderResult;

/// External OAuth sign-in capability.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Human-readable provider name for notifications.
    fn name(&self) -> &'static str;

    /// Start an OAuth sign-in and return the resulting session.
    async fn begin_sign_in(&self) -> ProviderResult<Session>;
}

/// ThaiID integration placeholder. The real flow would:
/// 1. Redirect to the ThaiID authorization endpoint.
/// 2. Exchange the returned code for a provider session.
/// 3. Link the external identity to the platform account.
pub struct StubThaiIdProvider;

#[async_trait]
impl OAuthProvider for StubThaiIdProvider {
    fn name(&self) -> &'static str {
        "ThaiID"
    }

    async fn begin_sign_in(&self) -> ProviderResult<Session> {
        tracing::info!("ThaiID sign-in requested; integration not yet available");
        Err(Box::new(crate::CoreError::NotAvailable(
            "ThaiID sign-in is not yet available".to_string(),
        )))
    }
}
