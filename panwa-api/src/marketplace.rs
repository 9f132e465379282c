use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Listing dataset (static: the marketplace is demo content, not backed by
// the provider)
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Car,
    Property,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: i64,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub image: &'static str,
    pub is_rental: bool,
    pub location: &'static str,
    pub features: &'static [&'static str],
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "car-1",
            title: "Toyota Camry 2023",
            description: "Latest-generation sedan in excellent condition with low mileage",
            price: 950_000,
            kind: ListingKind::Car,
            image: "/assets/marketplace/car-1.jpg",
            is_rental: false,
            location: "Bangkok",
            features: &["Automatic", "Reverse camera", "Navigation", "Fuel efficient"],
        },
        Listing {
            id: "car-2",
            title: "Honda Civic 2022",
            description: "Well-kept sedan, one year of use, warranty included",
            price: 850_000,
            kind: ListingKind::Car,
            image: "/assets/marketplace/car-2.jpg",
            is_rental: false,
            location: "Chiang Mai",
            features: &["Automatic", "Power doors", "Parking sensors"],
        },
        Listing {
            id: "car-3",
            title: "Mercedes-Benz C-Class monthly rental",
            description: "Luxury car for monthly rent, near-new condition, full insurance",
            price: 45_000,
            kind: ListingKind::Car,
            image: "/assets/marketplace/car-3.jpg",
            is_rental: true,
            location: "Bangkok",
            features: &["Monthly rental", "First-class insurance", "Maintenance included"],
        },
        Listing {
            id: "property-1",
            title: "The Metropolis downtown condo",
            description: "Luxury one-bedroom condo in the city centre with a great view",
            price: 3_500_000,
            kind: ListingKind::Property,
            image: "/assets/marketplace/property-1.jpg",
            is_rental: false,
            location: "Sukhumvit, Bangkok",
            features: &["1 bedroom", "1 bathroom", "Near BTS", "Swimming pool"],
        },
        Listing {
            id: "property-2",
            title: "Two-storey detached house, Supalai village",
            description: "Three bedrooms, 150 sqm living area on a 240 sqm plot",
            price: 5_200_000,
            kind: ListingKind::Property,
            image: "/assets/marketplace/property-2.jpg",
            is_rental: false,
            location: "Rangsit, Pathum Thani",
            features: &["3 bedrooms", "2 bathrooms", "Parking for 2", "Garden"],
        },
        Listing {
            id: "property-3",
            title: "The Link condo for rent",
            description: "Monthly rental, newly fitted and fully furnished, move-in ready",
            price: 15_000,
            kind: ListingKind::Property,
            image: "/assets/marketplace/property-3.jpg",
            is_rental: true,
            location: "Ratchadaphisek, Bangkok",
            features: &["1 bedroom", "1 bathroom", "Fully furnished", "Near MRT"],
        },
        Listing {
            id: "property-4",
            title: "Three-storey townhome, Baan Klang Muang",
            description: "New townhome in a well-connected neighbourhood",
            price: 4_200_000,
            kind: ListingKind::Property,
            image: "/assets/marketplace/property-4.jpg",
            is_rental: false,
            location: "Bang Na, Bangkok",
            features: &["3 bedrooms", "3 bathrooms", "Parking", "Shared facilities"],
        },
        Listing {
            id: "car-4",
            title: "Nissan Leaf electric car",
            description: "Fully electric, economical and environmentally friendly",
            price: 1_200_000,
            kind: ListingKind::Car,
            image: "/assets/marketplace/car-4.jpg",
            is_rental: false,
            location: "Bangkok",
            features: &["Electric", "Fast charging", "Long range", "Energy saving"],
        },
    ]
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Low,
    Medium,
    High,
}

impl PriceBand {
    pub fn contains(&self, price: i64) -> bool {
        match self {
            PriceBand::Low => price < 500_000,
            PriceBand::Medium => (500_000..2_000_000).contains(&price),
            PriceBand::High => price >= 2_000_000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingFilter {
    #[serde(rename = "type")]
    pub kind: Option<ListingKind>,
    pub price: Option<PriceBand>,
    pub rental: Option<bool>,
}

/// Apply the sidebar filters conjunctively. Absent filters match everything.
pub fn filter_listings(items: &[Listing], filter: &ListingFilter) -> Vec<Listing> {
    items
        .iter()
        .filter(|item| filter.kind.map_or(true, |kind| item.kind == kind))
        .filter(|item| filter.price.map_or(true, |band| band.contains(item.price)))
        .filter(|item| filter.rental.map_or(true, |rental| item.is_rental == rental))
        .cloned()
        .collect()
}

// ============================================================================
// Handler
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub listings: Vec<Listing>,
    pub count: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/listings", get(list_listings))
}

/// GET /v1/listings?type=&price=&rental=
async fn list_listings(Query(filter): Query<ListingFilter>) -> Json<ListingResponse> {
    let filtered = filter_listings(&listings(), &filter);
    Json(ListingResponse {
        count: filtered.len(),
        listings: filtered,
    })
}
