use async_trait::async_trait;
use panwa_core::{ProviderResult, ReservationRepository, StoreRepository, VerificationRepository};
use panwa_shared::{NewReservation, NewVerification, Reservation, Store, VerificationRecord};
use uuid::Uuid;

use crate::client::ProviderClient;
use crate::error::ClientError;

#[async_trait]
impl StoreRepository for ProviderClient {
    async fn fetch_stores(&self) -> ProviderResult<Vec<Store>> {
        let resp = self
            .authed(
                self.http
                    .get(self.rest_url("stores"))
                    .query(&[("select", "*")]),
                None,
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        let stores: Vec<Store> = Self::json_body(resp).await?;
        tracing::debug!(count = stores.len(), "fetched stores");
        Ok(stores)
    }
}

#[async_trait]
impl ReservationRepository for ProviderClient {
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
        access_token: Option<&str>,
    ) -> ProviderResult<Reservation> {
        let resp = self
            .authed(
                self.http
                    .post(self.rest_url("reservations"))
                    .header("Prefer", "return=representation")
                    .json(reservation),
                access_token,
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        // The row API answers an insert with a one-element array.
        let mut rows: Vec<Reservation> = Self::json_body(resp).await?;
        rows.pop().ok_or_else(|| {
            Box::new(ClientError::InvalidResponse(
                "insert returned no representation".to_string(),
            )) as Box<dyn std::error::Error + Send + Sync>
        })
    }

    async fn list_reservations(&self, access_token: &str) -> ProviderResult<Vec<Reservation>> {
        let resp = self
            .authed(
                self.http
                    .get(self.rest_url("reservations"))
                    .query(&[("select", "*"), ("order", "created_at.desc")]),
                Some(access_token),
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        Ok(Self::json_body(resp).await?)
    }
}

#[async_trait]
impl VerificationRepository for ProviderClient {
    async fn insert_verification(
        &self,
        record: &NewVerification,
        access_token: &str,
    ) -> ProviderResult<VerificationRecord> {
        let resp = self
            .authed(
                self.http
                    .post(self.rest_url("verifications"))
                    .header("Prefer", "return=representation")
                    .json(record),
                Some(access_token),
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        let mut rows: Vec<VerificationRecord> = Self::json_body(resp).await?;
        rows.pop().ok_or_else(|| {
            Box::new(ClientError::InvalidResponse(
                "insert returned no representation".to_string(),
            )) as Box<dyn std::error::Error + Send + Sync>
        })
    }

    async fn latest_verification(
        &self,
        user_id: Uuid,
        access_token: &str,
    ) -> ProviderResult<Option<VerificationRecord>> {
        let user_filter = format!("eq.{user_id}");
        let resp = self
            .authed(
                self.http.get(self.rest_url("verifications")).query(&[
                    ("select", "*"),
                    ("user_id", user_filter.as_str()),
                    ("order", "created_at.desc"),
                    ("limit", "1"),
                ]),
                Some(access_token),
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        let mut rows: Vec<VerificationRecord> = Self::json_body(resp).await?;
        Ok(rows.pop())
    }
}
