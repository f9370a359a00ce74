//! Airport entity.

use serde_json::json;
use std::fmt::Display;
use uuid::Uuid;

use super::Airline;
use crate::error::AppError;

pub const AIRPORT_NOT_FOUND: &str = "The airport with the given id was not found";

/// NotFound error for an airport id, shared by services and repositories.
pub fn airport_not_found(id: impl Display) -> AppError {
    AppError::not_found(AIRPORT_NOT_FOUND, json!({ "id": id.to_string() }))
}

/// Required length of an airport code, in characters.
pub const AIRPORT_CODE_LEN: usize = 3;

/// Returns true if `code` is exactly [`AIRPORT_CODE_LEN`] characters long.
pub fn is_valid_airport_code(code: &str) -> bool {
    code.chars().count() == AIRPORT_CODE_LEN
}

/// An airport together with the airlines linked to it.
///
/// `airlines` is loaded one level deep: the nested airlines carry an empty
/// `airports` collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
    pub airlines: Vec<Airline>,
}

impl Airport {
    /// Creates a new Airport instance without linked airlines.
    pub fn new(id: Uuid, name: String, code: String, country: String, city: String) -> Self {
        Self {
            id,
            name,
            code,
            country,
            city,
            airlines: Vec::new(),
        }
    }

    /// Merges a partial update onto this airport. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: AirportPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
    }
}

/// Input data for creating a new airport.
#[derive(Debug, Clone)]
pub struct NewAirport {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

/// Partial update for an existing airport.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AirportPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}
