//! Core domain entities.
//!
//! Entities are plain data structures. Creation and partial update use
//! separate input types:
//! - `NewAirline`, `NewAirport` - For creating new records
//! - `AirlinePatch`, `AirportPatch` - For field-by-field merges
//!
//! The airline/airport relation is a pure join with no attributes of its own,
//! so it has no entity; each side exposes the other as a collection.

pub mod airline;
pub mod airport;

pub use airline::{AIRLINE_NOT_FOUND, Airline, AirlinePatch, NewAirline, airline_not_found};
pub use airport::{
    AIRPORT_CODE_LEN, AIRPORT_NOT_FOUND, Airport, AirportPatch, NewAirport, airport_not_found,
    is_valid_airport_code,
};
