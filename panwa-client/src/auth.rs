use async_trait::async_trait;
use panwa_core::{AuthProvider, ProviderResult};
use panwa_shared::{Masked, Session, User};
use serde::Serialize;

use crate::client::ProviderClient;
use crate::error::ClientError;

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthProvider for ProviderClient {
    async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<Session> {
        tracing::info!(email = %Masked(email), "password sign-in");
        let resp = self
            .authed(
                self.http
                    .post(self.auth_url("token"))
                    .query(&[("grant_type", "password")])
                    .json(&PasswordGrant { email, password }),
                None,
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        Ok(Self::json_body::<Session>(resp).await?)
    }

    async fn sign_up(&self, email: &str, password: &str) -> ProviderResult<Session> {
        tracing::info!(email = %Masked(email), "sign-up");
        let resp = self
            .authed(
                self.http
                    .post(self.auth_url("signup"))
                    .json(&PasswordGrant { email, password }),
                None,
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        Ok(Self::json_body::<Session>(resp).await?)
    }

    async fn get_user(&self, access_token: &str) -> ProviderResult<User> {
        let resp = self
            .authed(self.http.get(self.auth_url("user")), Some(access_token))
            .send()
            .await
            .map_err(ClientError::Http)?;

        Ok(Self::json_body::<User>(resp).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_decodes_from_auth_response() {
        let json = r#"{
            "access_token": "eyJ.header.payload",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-1",
            "user": {
                "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "email": "someone@example.com",
                "created_at": "2026-01-01T00:00:00Z"
            }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.user.email.as_deref(), Some("someone@example.com"));
    }
}
