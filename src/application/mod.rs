//! Application layer services implementing business logic.
//!
//! Services consume repository traits passed in by constructor, enforce the
//! business rules, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::airline_service::AirlineService`] - Airline CRUD and foundation date rules
//! - [`services::airport_service::AirportService`] - Airport CRUD and code rules
//! - [`services::airline_airport_service::AirlineAirportService`] - Airline/airport links

pub mod services;
