//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage ports consumed by the application services.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AirlineRepository`] - Airline CRUD and the airline/airport links
//! - [`AirportRepository`] - Airport CRUD

pub mod airline_repository;
pub mod airport_repository;

pub use airline_repository::AirlineRepository;
pub use airport_repository::AirportRepository;

#[cfg(test)]
pub use airline_repository::MockAirlineRepository;
#[cfg(test)]
pub use airport_repository::MockAirportRepository;
