//! Airline management service.

use crate::domain::entities::{Airline, AirlinePatch, NewAirline, airline_not_found};
use crate::domain::repositories::AirlineRepository;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Service for airline CRUD.
///
/// Enforces that an airline's foundation date lies in the past.
pub struct AirlineService {
    repository: Arc<dyn AirlineRepository>,
}

impl AirlineService {
    /// Creates a new airline service.
    pub fn new(repository: Arc<dyn AirlineRepository>) -> Self {
        Self { repository }
    }

    /// Lists every airline with its airports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all(&self) -> Result<Vec<Airline>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves one airline with its airports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_one(&self, id: &str) -> Result<Airline, AppError> {
        let Some(uuid) = parse_id(id) else {
            return Err(airline_not_found(id));
        };

        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| airline_not_found(id))
    }

    /// Creates an airline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PreconditionFailed`] unless the foundation date is
    /// strictly before now.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_airline: NewAirline) -> Result<Airline, AppError> {
        let now = Utc::now();

        if new_airline.foundation_date >= now {
            tracing::warn!(foundation_date = %new_airline.foundation_date, "Rejected airline with future foundation date");
            return Err(AppError::precondition_failed(
                "The foundation date must be less than the current date",
                json!({ "foundation_date": new_airline.foundation_date }),
            ));
        }

        let airline = self.repository.create(new_airline).await?;
        tracing::info!(airline_id = %airline.id, name = %airline.name, "Airline created");

        Ok(airline)
    }

    /// Merges `patch` onto an existing airline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    /// Returns [`AppError::PreconditionFailed`] if the new foundation date is
    /// after now.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: &str, patch: AirlinePatch) -> Result<Airline, AppError> {
        let mut airline = self.find_one(id).await?;

        if let Some(foundation_date) = patch.foundation_date {
            check_not_in_future(foundation_date, Utc::now())?;
        }

        airline.apply(patch);
        let airline = self.repository.save(airline).await?;
        tracing::info!(airline_id = %airline.id, "Airline updated");

        Ok(airline)
    }

    /// Deletes an airline. Its links go with it; the airports stay.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let airline = self.find_one(id).await?;

        self.repository.remove(airline.id).await?;
        tracing::info!(airline_id = %airline.id, "Airline deleted");

        Ok(())
    }

    /// Counts stored airlines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Parses a client-supplied id. Malformed ids cannot match any record.
pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn check_not_in_future(foundation_date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), AppError> {
    if foundation_date > now {
        tracing::warn!(%foundation_date, "Rejected airline update with future foundation date");
        return Err(AppError::precondition_failed(
            "The airline's foundation date must be earlier than today",
            json!({ "foundation_date": foundation_date }),
        ));
    }

    Ok(())
}
