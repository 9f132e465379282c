use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ServiceCard {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    path: &'static str,
}

#[derive(Debug, Serialize)]
struct HomeResponse {
    platform: &'static str,
    tagline: &'static str,
    services: Vec<ServiceCard>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// GET /
/// Landing content: the service directory the navigation is built from.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        platform: "Panwa",
        tagline: "Buy, sell, book and get paid in crypto — one platform",
        services: vec![
            ServiceCard {
                id: "freelance",
                title: "Freelance Services",
                description: "Hire vetted freelancers across teaching, development and design",
                path: "/freelance-services",
            },
            ServiceCard {
                id: "marketplace",
                title: "Marketplace",
                description: "Buy, sell or rent cars and property with crypto or card",
                path: "/crypto-marketplace",
            },
            ServiceCard {
                id: "reservations",
                title: "Travel Reservations",
                description: "Book flights and hotels across Thailand",
                path: "/travel-reservations",
            },
            ServiceCard {
                id: "map",
                title: "Payment Locations",
                description: "Find stores that accept crypto payments near you",
                path: "/crypto-payment-locations",
            },
            ServiceCard {
                id: "verification",
                title: "Identity Verification",
                description: "Verify your identity to unlock the full platform",
                path: "/identity-verification",
            },
        ],
    })
}
