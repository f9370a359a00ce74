//! Repository trait for airports.

use crate::domain::entities::{Airport, NewAirport};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage port for airports. Reads return airports with their airlines loaded.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAirportRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirportRepository: Send + Sync {
    /// Lists every airport with its airlines.
    async fn find_all(&self) -> Result<Vec<Airport>, AppError>;

    /// Finds an airport by id, with its airlines.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, AppError>;

    /// Inserts a new airport and returns it with its generated id.
    async fn create(&self, new_airport: NewAirport) -> Result<Airport, AppError>;

    /// Persists the scalar fields of an existing airport.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airport does not exist.
    async fn save(&self, airport: Airport) -> Result<Airport, AppError>;

    /// Removes an airport. Join rows are removed with it; airlines are not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airport does not exist.
    async fn remove(&self, id: Uuid) -> Result<(), AppError>;

    /// Counts stored airports.
    async fn count(&self) -> Result<i64, AppError>;
}
