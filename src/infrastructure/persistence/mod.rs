//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAirlineRepository`] - Airlines and the `airline_airports` join table
//! - [`PgAirportRepository`] - Airports

pub mod pg_airline_repository;
pub mod pg_airport_repository;
mod rows;

pub use pg_airline_repository::PgAirlineRepository;
pub use pg_airport_repository::PgAirportRepository;
