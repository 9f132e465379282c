use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the traveller wants to book.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Flight,
    Hotel,
    #[default]
    Both,
}

/// The search step's form state.
///
/// Dates go through the setters so the departure/return ordering rule is
/// applied the same way regardless of which field changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    pub kind: BookingKind,
    pub destination: String,
    departure_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    pub adults: i32,
    pub children: i32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchFormError {
    #[error("Destination is required")]
    MissingDestination,

    #[error("Departure date is required")]
    MissingDepartureDate,

    #[error("Return date cannot be before the departure date")]
    ReturnBeforeDeparture,

    #[error("At least one adult traveller is required")]
    NoAdults,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            adults: 1,
            ..Self::default()
        }
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    /// Set the departure date. A previously chosen return date that would
    /// now precede departure is cleared rather than rejected.
    pub fn set_departure_date(&mut self, date: NaiveDate) {
        if matches!(self.return_date, Some(ret) if ret < date) {
            self.return_date = None;
        }
        self.departure_date = Some(date);
    }

    /// Set the return date; rejected when it precedes the departure date.
    pub fn set_return_date(&mut self, date: Option<NaiveDate>) -> Result<(), SearchFormError> {
        if let (Some(ret), Some(dep)) = (date, self.departure_date) {
            if ret < dep {
                return Err(SearchFormError::ReturnBeforeDeparture);
            }
        }
        self.return_date = date;
        Ok(())
    }

    /// Validate required fields and produce the query the offer generator
    /// consumes.
    pub fn validate(&self) -> Result<SearchQuery, SearchFormError> {
        if self.destination.trim().is_empty() {
            return Err(SearchFormError::MissingDestination);
        }
        let departure_date = self
            .departure_date
            .ok_or(SearchFormError::MissingDepartureDate)?;
        if let Some(ret) = self.return_date {
            if ret < departure_date {
                return Err(SearchFormError::ReturnBeforeDeparture);
            }
        }
        if self.adults < 1 {
            return Err(SearchFormError::NoAdults);
        }

        Ok(SearchQuery {
            kind: self.kind,
            destination: self.destination.trim().to_string(),
            departure_date,
            return_date: self.return_date,
            adults: self.adults,
            children: self.children.max(0),
        })
    }
}

/// A validated search, ready for offer generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub kind: BookingKind,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: i32,
    pub children: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_departure_after_return_clears_return() {
        let mut form = SearchForm::new();
        form.set_departure_date(date("2026-09-01"));
        form.set_return_date(Some(date("2026-09-05"))).unwrap();

        // Moving departure past the chosen return date drops the return date.
        form.set_departure_date(date("2026-09-10"));
        assert_eq!(form.return_date(), None);
        assert_eq!(form.departure_date(), Some(date("2026-09-10")));
    }

    #[test]
    fn test_departure_before_return_keeps_return() {
        let mut form = SearchForm::new();
        form.set_departure_date(date("2026-09-01"));
        form.set_return_date(Some(date("2026-09-05"))).unwrap();

        form.set_departure_date(date("2026-09-03"));
        assert_eq!(form.return_date(), Some(date("2026-09-05")));
    }

    #[test]
    fn test_return_before_departure_rejected() {
        let mut form = SearchForm::new();
        form.set_departure_date(date("2026-09-10"));
        let result = form.set_return_date(Some(date("2026-09-05")));
        assert_eq!(result, Err(SearchFormError::ReturnBeforeDeparture));
        assert_eq!(form.return_date(), None);
    }

    #[test]
    fn test_validate_requires_destination_and_departure() {
        let mut form = SearchForm::new();
        assert_eq!(
            form.validate().unwrap_err(),
            SearchFormError::MissingDestination
        );

        form.destination = "Phuket".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            SearchFormError::MissingDepartureDate
        );

        form.set_departure_date(date("2026-09-01"));
        let query = form.validate().unwrap();
        assert_eq!(query.destination, "Phuket");
        assert_eq!(query.adults, 1);
    }

    #[test]
    fn test_validate_requires_an_adult() {
        let mut form = SearchForm::new();
        form.destination = "Phuket".to_string();
        form.set_departure_date(date("2026-09-01"));
        form.adults = 0;
        assert_eq!(form.validate().unwrap_err(), SearchFormError::NoAdults);
    }
}
