//! Airport management service.

use crate::application::services::airline_service::parse_id;
use crate::domain::entities::{
    Airport, AirportPatch, NewAirport, airport_not_found, is_valid_airport_code,
};
use crate::domain::repositories::AirportRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for airport CRUD.
///
/// Enforces that airport codes are exactly three characters long.
pub struct AirportService {
    repository: Arc<dyn AirportRepository>,
}

impl AirportService {
    /// Creates a new airport service.
    pub fn new(repository: Arc<dyn AirportRepository>) -> Self {
        Self { repository }
    }

    /// Lists every airport with its airlines.
    pub async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves one airport with its airlines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airport does not exist.
    pub async fn find_one(&self, id: &str) -> Result<Airport, AppError> {
        let Some(uuid) = parse_id(id) else {
            return Err(airport_not_found(id));
        };

        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| airport_not_found(id))
    }

    /// Creates an airport.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PreconditionFailed`] if the code is not three characters.
    pub async fn create(&self, new_airport: NewAirport) -> Result<Airport, AppError> {
        check_code(&new_airport.code)?;

        let airport = self.repository.create(new_airport).await?;
        tracing::info!(airport_id = %airport.id, code = %airport.code, "Airport created");

        Ok(airport)
    }

    /// Merges `patch` onto an existing airport.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airport does not exist.
    /// Returns [`AppError::PreconditionFailed`] if a new code is not three characters.
    pub async fn update(&self, id: &str, patch: AirportPatch) -> Result<Airport, AppError> {
        let mut airport = self.find_one(id).await?;

        if let Some(code) = &patch.code {
            check_code(code)?;
        }

        airport.apply(patch);
        let airport = self.repository.save(airport).await?;
        tracing::info!(airport_id = %airport.id, "Airport updated");

        Ok(airport)
    }

    /// Deletes an airport. Its links go with it; the airlines stay.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airport does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let airport = self.find_one(id).await?;

        self.repository.remove(airport.id).await?;
        tracing::info!(airport_id = %airport.id, "Airport deleted");

        Ok(())
    }

    /// Counts stored airports.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}


fn check_code(code: &str) -> Result<(), AppError> {
    if !is_valid_airport_code(code) {
        tracing::warn!(code, "Rejected airport code");
        return Err(AppError::precondition_failed(
            "The airport code must have 3 characters",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
