pub mod app_config;
pub mod auth;
pub mod client;
pub mod error;
pub mod rows;
pub mod storage;

pub use client::ProviderClient;
pub use error::{ClientError, ClientResult};
