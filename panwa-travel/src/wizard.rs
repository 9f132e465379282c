use panwa_shared::NewReservation;
use uuid::Uuid;

use crate::generator::mock_offers;
use crate::models::Offer;
use crate::quote::Quote;
use crate::reference::booking_reference;
use crate::search::{SearchForm, SearchFormError, SearchQuery};

/// Which view of the booking flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Search,
    Details,
}

/// The three-step booking flow: search → details → (confirmed | back).
///
/// Holds at most one selected offer. Confirmation collapses back to the
/// search step rather than entering a terminal state. The in-flight flag
/// only guards local re-entry while the single insert is outstanding; a
/// response lost after a successful remote write can still produce a
/// duplicate booking on retry.
pub struct ReservationWizard {
    step: WizardStep,
    query: Option<SearchQuery>,
    results: Vec<Offer>,
    selected: Option<Offer>,
    submitting: bool,
}

impl ReservationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Search,
            query: None,
            results: Vec::new(),
            selected: None,
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn results(&self) -> &[Offer] {
        &self.results
    }

    pub fn selected(&self) -> Option<&Offer> {
        self.selected.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run a search: validates the form, replaces the result set with the
    /// mock offers, and drops any previous selection.
    pub fn submit_search(&mut self, form: &SearchForm) -> Result<&[Offer], WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        let query = form.validate()?;
        self.results = mock_offers(&query);
        self.query = Some(query);
        self.selected = None;
        self.step = WizardStep::Search;
        Ok(&self.results)
    }

    /// Transition: Search → Details. Selecting an offer is the only way in.
    pub fn select_offer(&mut self, offer_id: Uuid) -> Result<&Offer, WizardError> {
        if self.step != WizardStep::Search {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "select",
            });
        }
        let offer = self
            .results
            .iter()
            .find(|o| o.id == offer_id)
            .cloned()
            .ok_or(WizardError::UnknownOffer(offer_id))?;
        self.step = WizardStep::Details;
        Ok(&*self.selected.insert(offer))
    }

    /// Price breakdown for the selected offer.
    pub fn quote(&self) -> Option<Quote> {
        self.selected.as_ref().map(|o| Quote::for_price(o.price))
    }

    /// Start confirming the selected offer. Marks the wizard in-flight and
    /// returns the insert payload; re-entrant calls are rejected until
    /// `confirm_succeeded` or `confirm_failed` settles the attempt.
    pub fn begin_confirm(&mut self) -> Result<NewReservation, WizardError> {
        if self.step != WizardStep::Details {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "confirm",
            });
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        let offer = self.selected.as_ref().ok_or(WizardError::NothingSelected)?;
        let (adults, children) = self
            .query
            .as_ref()
            .map(|q| (q.adults, q.children))
            .unwrap_or((1, 0));

        self.submitting = true;
        Ok(NewReservation {
            user_id: None,
            kind: offer.kind.into(),
            destination: offer.destination.clone(),
            departure_date: offer.departure_date,
            return_date: offer.return_date,
            adults,
            children,
            provider: offer.provider.clone(),
            price: offer.price,
            booking_reference: Some(booking_reference()),
        })
    }

    /// Transition: Details → Search after the insert resolved. Clears the
    /// selection; the search results stay visible.
    pub fn confirm_succeeded(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Details || !self.submitting {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "confirm_succeeded",
            });
        }
        self.submitting = false;
        self.selected = None;
        self.step = WizardStep::Search;
        Ok(())
    }

    /// The insert failed: stay on the details view so the traveller can
    /// retry, and release the in-flight guard.
    pub fn confirm_failed(&mut self) {
        self.submitting = false;
    }

    /// Transition: Details → Search without booking.
    pub fn back(&mut self) -> Result<(), WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step != WizardStep::Details {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "back",
            });
        }
        self.selected = None;
        self.step = WizardStep::Search;
        Ok(())
    }
}

impl Default for ReservationWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Action '{action}' is not allowed from the {from:?} step")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },

    #[error("No offer with id {0} in the current results")]
    UnknownOffer(Uuid),

    #[error("No offer is selected")]
    NothingSelected,

    #[error("A confirmation is already in flight")]
    SubmissionInFlight,

    #[error(transparent)]
    Form(#[from] SearchFormError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferKind;

    fn phuket_form() -> SearchForm {
        let mut form = SearchForm::new();
        form.destination = "Phuket".to_string();
        form.set_departure_date("2026-09-01".parse().unwrap());
        form.adults = 2;
        form.children = 1;
        form
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut wizard = ReservationWizard::new();
        let offers = wizard.submit_search(&phuket_form()).unwrap().to_vec();
        assert_eq!(offers.len(), 4);

        // Search → Details
        let flight = offers.iter().find(|o| o.kind == OfferKind::Flight).unwrap();
        wizard.select_offer(flight.id).unwrap();
        assert_eq!(wizard.step(), WizardStep::Details);

        // Confirm → back to Search with the selection cleared
        let payload = wizard.begin_confirm().unwrap();
        assert_eq!(payload.destination, "Phuket");
        assert_eq!(payload.adults, 2);
        assert_eq!(payload.children, 1);
        assert!(payload.booking_reference.unwrap().starts_with("REF-"));

        wizard.confirm_succeeded().unwrap();
        assert_eq!(wizard.step(), WizardStep::Search);
        assert!(wizard.quote().is_none());
    }

    #[test]
    fn test_confirm_requires_selection() {
        let mut wizard = ReservationWizard::new();
        wizard.submit_search(&phuket_form()).unwrap();

        // Cannot confirm straight from the search step
        assert!(matches!(
            wizard.begin_confirm(),
            Err(WizardError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_in_flight_guard_blocks_reentry() {
        let mut wizard = ReservationWizard::new();
        let offer_id = wizard.submit_search(&phuket_form()).unwrap()[0].id;
        wizard.select_offer(offer_id).unwrap();

        wizard.begin_confirm().unwrap();
        assert!(wizard.is_submitting());
        assert!(matches!(
            wizard.begin_confirm(),
            Err(WizardError::SubmissionInFlight)
        ));
        // Back is also disabled while the insert is outstanding.
        assert!(matches!(wizard.back(), Err(WizardError::SubmissionInFlight)));
    }

    #[test]
    fn test_confirm_failure_stays_on_details() {
        let mut wizard = ReservationWizard::new();
        let offer_id = wizard.submit_search(&phuket_form()).unwrap()[0].id;
        wizard.select_offer(offer_id).unwrap();

        wizard.begin_confirm().unwrap();
        wizard.confirm_failed();

        assert_eq!(wizard.step(), WizardStep::Details);
        assert!(!wizard.is_submitting());
        // A second attempt is allowed and produces a fresh reference; the
        // first insert may still have landed server-side (known risk).
        assert!(wizard.begin_confirm().is_ok());
    }

    #[test]
    fn test_back_clears_selection() {
        let mut wizard = ReservationWizard::new();
        let offer_id = wizard.submit_search(&phuket_form()).unwrap()[0].id;
        wizard.select_offer(offer_id).unwrap();

        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Search);
        assert!(wizard.quote().is_none());
        // Results survive going back; a new selection is possible.
        assert!(wizard.select_offer(offer_id).is_ok());
    }

    #[test]
    fn test_new_search_replaces_results() {
        let mut wizard = ReservationWizard::new();
        let first = wizard.submit_search(&phuket_form()).unwrap()[0].id;

        let mut form = phuket_form();
        form.destination = "Chiang Mai".to_string();
        wizard.submit_search(&form).unwrap();

        assert!(wizard.results().iter().all(|o| o.destination == "Chiang Mai"));
        assert!(matches!(
            wizard.select_offer(first),
            Err(WizardError::UnknownOffer(_))
        ));
    }
}
