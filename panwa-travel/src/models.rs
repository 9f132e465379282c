use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Offer category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Flight,
    Hotel,
}

impl From<OfferKind> for panwa_shared::ReservationKind {
    fn from(kind: OfferKind) -> Self {
        match kind {
            OfferKind::Flight => panwa_shared::ReservationKind::Flight,
            OfferKind::Hotel => panwa_shared::ReservationKind::Hotel,
        }
    }
}

/// A synthetic flight/hotel search result, not tied to real inventory.
///
/// For hotels the date pair reads as check-in/check-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub kind: OfferKind,
    pub provider: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub price: i64,
    pub room_type: Option<String>,
    pub available: bool,
}

impl Offer {
    pub fn is_hotel(&self) -> bool {
        self.kind == OfferKind::Hotel
    }
}
