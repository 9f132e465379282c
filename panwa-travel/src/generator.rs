use uuid::Uuid;

use crate::models::{Offer, OfferKind};
use crate::search::SearchQuery;

/// Produce the fixed demo result set for a search: two flight offers and
/// two hotel offers, all marked available and echoing the submitted
/// destination and dates. No real inventory is consulted.
pub fn mock_offers(query: &SearchQuery) -> Vec<Offer> {
    vec![
        Offer {
            id: Uuid::new_v4(),
            kind: OfferKind::Flight,
            provider: "Thai Airways".to_string(),
            destination: query.destination.clone(),
            departure_date: query.departure_date,
            return_date: query.return_date,
            price: 12_500,
            room_type: None,
            available: true,
        },
        Offer {
            id: Uuid::new_v4(),
            kind: OfferKind::Flight,
            provider: "Bangkok Airways".to_string(),
            destination: query.destination.clone(),
            departure_date: query.departure_date,
            return_date: query.return_date,
            price: 8_900,
            room_type: None,
            available: true,
        },
        Offer {
            id: Uuid::new_v4(),
            kind: OfferKind::Hotel,
            provider: "Hilton".to_string(),
            destination: query.destination.clone(),
            departure_date: query.departure_date,
            return_date: query.return_date,
            price: 5_600,
            room_type: Some("Deluxe".to_string()),
            available: true,
        },
        Offer {
            id: Uuid::new_v4(),
            kind: OfferKind::Hotel,
            provider: "Marriott".to_string(),
            destination: query.destination.clone(),
            departure_date: query.departure_date,
            return_date: query.return_date,
            price: 4_800,
            room_type: Some("Standard".to_string()),
            available: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchForm;

    fn phuket_query() -> SearchQuery {
        let mut form = SearchForm::new();
        form.destination = "Phuket".to_string();
        form.set_departure_date("2026-09-01".parse().unwrap());
        form.set_return_date(Some("2026-09-08".parse().unwrap()))
            .unwrap();
        form.validate().unwrap()
    }

    #[test]
    fn test_two_flights_two_hotels() {
        let offers = mock_offers(&phuket_query());
        assert_eq!(offers.len(), 4);

        let flights = offers.iter().filter(|o| o.kind == OfferKind::Flight).count();
        let hotels = offers.iter().filter(|o| o.kind == OfferKind::Hotel).count();
        assert_eq!(flights, 2);
        assert_eq!(hotels, 2);
        assert!(offers.iter().all(|o| o.available));
        assert!(offers.iter().all(|o| o.destination == "Phuket"));
    }

    #[test]
    fn test_offers_echo_dates() {
        let query = phuket_query();
        let offers = mock_offers(&query);
        for offer in &offers {
            assert_eq!(offer.departure_date, query.departure_date);
            assert_eq!(offer.return_date, query.return_date);
        }
    }

    #[test]
    fn test_room_types_only_on_hotels() {
        let offers = mock_offers(&phuket_query());
        for offer in &offers {
            assert_eq!(offer.room_type.is_some(), offer.is_hotel());
        }
    }
}
