//! Repository trait for airlines and the airline/airport association.

use crate::domain::entities::{Airline, NewAirline};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage port for airlines.
///
/// The airline side owns the association sub-resource, so the link
/// operations live here. Every read returns airlines with their airports
/// loaded.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAirlineRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirlineRepository: Send + Sync {
    /// Lists every airline with its airports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Airline>, AppError>;

    /// Finds an airline by id, with its airports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airline>, AppError>;

    /// Inserts a new airline and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_airline: NewAirline) -> Result<Airline, AppError>;

    /// Persists the scalar fields of an existing airline.
    ///
    /// The `airports` collection is ignored; use the link operations to
    /// change it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, airline: Airline) -> Result<Airline, AppError>;

    /// Removes an airline. Join rows are removed with it; airports are not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, id: Uuid) -> Result<(), AppError>;

    /// Counts stored airlines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Links an airport to an airline. Linking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), AppError>;

    /// Unlinks an airport from an airline. Returns false if no link existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<bool, AppError>;

    /// Replaces the airline's whole airport collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_airports(&self, airline_id: Uuid, airport_ids: Vec<Uuid>)
    -> Result<(), AppError>;
}
