use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-of-interest accepting crypto payments, rendered on the map page.
///
/// Rows live in the hosted provider's `stores` relation and are read-only
/// from this service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Option<String>,
    #[serde(default)]
    pub accepted_crypto: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationKind {
    Flight,
    Hotel,
}

impl ReservationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationKind::Flight => "flight",
            ReservationKind::Hotel => "hotel",
        }
    }
}

/// A travel booking row as returned by the provider.
///
/// `status` is server-defaulted on insert and never transitioned by this
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: ReservationKind,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: i32,
    pub children: i32,
    pub provider: String,
    pub price: i64,
    pub booking_reference: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for `reservations`. The status column is left to the
/// server default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: ReservationKind,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: i32,
    pub children: i32,
    pub provider: String,
    pub price: i64,
    pub booking_reference: Option<String>,
}

/// An identity-document review request. The status lifecycle
/// (pending/approved/rejected) is managed entirely by an external reviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type: String,
    pub document_path: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVerification {
    pub user_id: Uuid,
    pub document_type: String,
    pub document_path: String,
    pub status: String,
}

/// The authenticated principal as reported by the provider's auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A provider-issued session. The access token is a JWT signed with the
/// provider's secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub user: User,
}
