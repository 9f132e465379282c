pub mod models;
pub mod generator;
pub mod quote;
pub mod reference;
pub mod search;
pub mod wizard;

pub use generator::mock_offers;
pub use models::{Offer, OfferKind};
pub use quote::Quote;
pub use reference::booking_reference;
pub use search::{SearchForm, SearchFormError, SearchQuery};
pub use wizard::{ReservationWizard, WizardError, WizardStep};
