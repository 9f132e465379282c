use panwa_api::{app, state::{AppState, AuthConfig}};
use panwa_client::ProviderClient;
use panwa_core::StubThaiIdProvider;
use panwa_places::MapTokenStore;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panwa_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = panwa_client::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Panwa API on port {}", config.server.port);

    // One shared client for rows, storage and auth on the hosted provider.
    let provider = Arc::new(ProviderClient::new(
        &config.provider.url,
        &config.provider.api_key,
    ));

    let app_state = AppState {
        stores: provider.clone(),
        reservations: provider.clone(),
        verifications: provider.clone(),
        storage: provider.clone(),
        auth_provider: provider,
        oauth: Arc::new(StubThaiIdProvider),
        wizards: Arc::new(Mutex::new(HashMap::new())),
        map_tokens: Arc::new(MapTokenStore::new(&config.map.token_path)),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
