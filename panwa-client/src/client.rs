use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// HTTP client for the hosted backend provider (row API, auth API, object
/// storage). One instance is shared across the whole service.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl ProviderClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// URL of a row-API relation, e.g. `{base}/rest/v1/stores`.
    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// URL of an auth endpoint, e.g. `{base}/auth/v1/token`.
    pub(crate) fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, endpoint)
    }

    /// URL of a storage object, e.g. `{base}/storage/v1/object/{bucket}/{path}`.
    pub(crate) fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    /// Attach the provider api key plus a bearer token. Anonymous calls
    /// fall back to the api key as the bearer, which is what the provider
    /// expects for public-role access.
    pub(crate) fn authed(
        &self,
        req: reqwest::RequestBuilder,
        access_token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let bearer = access_token.unwrap_or(&self.api_key);
        req.header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    /// Turn a non-success response into `ClientError::Status`, carrying
    /// whatever message body the provider sent.
    pub(crate) async fn check(resp: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        let message = extract_error_message(&message);
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn json_body<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let checked = Self::check(resp).await?;
        Ok(checked.json::<T>().await?)
    }
}

/// Provider error bodies come as `{"message": ...}` or `{"error_description":
/// ...}` depending on the subsystem; fall back to the raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error_description", "error", "msg"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ProviderClient::new("https://project.example.co/", "anon-key");
        assert_eq!(
            client.rest_url("stores"),
            "https://project.example.co/rest/v1/stores"
        );
        assert_eq!(
            client.auth_url("token"),
            "https://project.example.co/auth/v1/token"
        );
        assert_eq!(
            client.object_url("verification_documents", "u1/id_card_1.pdf"),
            "https://project.example.co/storage/v1/object/verification_documents/u1/id_card_1.pdf"
        );
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            extract_error_message(r#"{"message":"duplicate key"}"#),
            "duplicate key"
        );
        assert_eq!(
            extract_error_message(r#"{"error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(extract_error_message("boom"), "boom");
    }
}
