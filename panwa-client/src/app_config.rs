use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub auth: AuthConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Hosted backend provider endpoints and keys.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret the provider signs access tokens with; used to verify
    /// sessions locally.
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    /// Where the user-entered map access token is persisted.
    pub token_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of PANWA)
            // Eg.. `PANWA__SERVER__PORT=9000` would set the server port
            .add_source(config::Environment::with_prefix("PANWA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
