//! Airline entity.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::fmt::Display;
use uuid::Uuid;

use super::Airport;
use crate::error::AppError;

pub const AIRLINE_NOT_FOUND: &str = "The airline with the given id was not found";

/// NotFound error for an airline id, shared by services and repositories.
pub fn airline_not_found(id: impl Display) -> AppError {
    AppError::not_found(AIRLINE_NOT_FOUND, json!({ "id": id.to_string() }))
}

/// An airline together with the airports it is linked to.
///
/// `airports` is loaded one level deep: the nested airports carry an empty
/// `airlines` collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub foundation_date: DateTime<Utc>,
    pub website: String,
    pub airports: Vec<Airport>,
}

impl Airline {
    /// Creates a new Airline instance without linked airports.
    pub fn new(
        id: Uuid,
        name: String,
        description: String,
        foundation_date: DateTime<Utc>,
        website: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            foundation_date,
            website,
            airports: Vec::new(),
        }
    }

    /// Returns true if the airport is in this airline's collection.
    pub fn has_airport(&self, airport_id: Uuid) -> bool {
        self.airports.iter().any(|a| a.id == airport_id)
    }

    /// Merges a partial update onto this airline. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: AirlinePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(foundation_date) = patch.foundation_date {
            self.foundation_date = foundation_date;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
    }
}

/// Input data for creating a new airline.
#[derive(Debug, Clone)]
pub struct NewAirline {
    pub name: String,
    pub description: String,
    pub foundation_date: DateTime<Utc>,
    pub website: String,
}

/// Partial update for an existing airline.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AirlinePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub foundation_date: Option<DateTime<Utc>>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn acme() -> Airline {
        Airline::new(
            Uuid::new_v4(),
            "Acme Air".to_string(),
            "Regional carrier".to_string(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            "http://a.com".to_string(),
        )
    }

    #[test]
    fn test_airline_creation() {
        let airline = acme();

        assert_eq!(airline.name, "Acme Air");
        assert_eq!(airline.website, "http://a.com");
        assert!(airline.airports.is_empty());
    }

    #[test]
    fn test_apply_partial_patch_keeps_other_fields() {
        let mut airline = acme();
        let before = airline.clone();

        airline.apply(AirlinePatch {
            name: Some("Acme Airways".to_string()),
            ..Default::default()
        });

        assert_eq!(airline.name, "Acme Airways");
        assert_eq!(airline.description, before.description);
        assert_eq!(airline.foundation_date, before.foundation_date);
        assert_eq!(airline.website, before.website);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut airline = acme();
        let before = airline.clone();

        airline.apply(AirlinePatch::default());

        assert_eq!(airline, before);
    }

    #[test]
    fn test_has_airport() {
        let mut airline = acme();
        let airport = Airport::new(
            Uuid::new_v4(),
            "El Dorado".to_string(),
            "BOG".to_string(),
            "Colombia".to_string(),
            "Bogota".to_string(),
        );
        let airport_id = airport.id;

        assert!(!airline.has_airport(airport_id));
        airline.airports.push(airport);
        assert!(airline.has_airport(airport_id));
    }

    #[test]
    fn test_not_found_message_is_the_same_for_any_id_form() {
        let id = Uuid::new_v4();

        let from_uuid = airline_not_found(id).to_error_info();
        let from_str = airline_not_found(id.to_string()).to_error_info();

        assert_eq!(from_uuid.message, AIRLINE_NOT_FOUND);
        assert_eq!(from_uuid.message, from_str.message);
        assert_eq!(from_uuid.details["id"], id.to_string());
    }
}
