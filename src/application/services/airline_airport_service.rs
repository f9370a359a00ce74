//! Airline/airport association service.

use crate::application::services::airline_service::parse_id;
use crate::domain::entities::{Airline, Airport, airline_not_found, airport_not_found};
use crate::domain::repositories::{AirlineRepository, AirportRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

const NOT_ASSOCIATED: &str = "The airport with the given id is not associated to the airline";

/// Manages the airports linked to an airline.
///
/// The airline owns the sub-resource: links are added, listed, replaced and
/// removed through it. Removing a link never removes either entity.
pub struct AirlineAirportService {
    airlines: Arc<dyn AirlineRepository>,
    airports: Arc<dyn AirportRepository>,
}

impl AirlineAirportService {
    /// Creates a new association service.
    pub fn new(airlines: Arc<dyn AirlineRepository>, airports: Arc<dyn AirportRepository>) -> Self {
        Self { airlines, airports }
    }

    /// Links an airport to an airline and returns the airline with its airports.
    ///
    /// Linking an airport that is already linked leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either the airline or the airport does not exist.
    pub async fn add_airport_to_airline(
        &self,
        airline_id: &str,
        airport_id: &str,
    ) -> Result<Airline, AppError> {
        let airline = self.load_airline(airline_id).await?;
        let airport = self.load_airport(airport_id).await?;

        self.airlines.add_airport(airline.id, airport.id).await?;
        tracing::info!(airline_id = %airline.id, airport_id = %airport.id, "Airport linked to airline");

        self.load_airline(airline_id).await
    }

    /// Returns one airport linked to an airline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either entity does not exist or the
    /// airport is not linked to the airline.
    pub async fn find_airport_from_airline(
        &self,
        airline_id: &str,
        airport_id: &str,
    ) -> Result<Airport, AppError> {
        let airport = self.load_airport(airport_id).await?;
        let airline = self.load_airline(airline_id).await?;

        if !airline.has_airport(airport.id) {
            return Err(AppError::not_found(
                NOT_ASSOCIATED,
                json!({ "airline_id": airline_id, "airport_id": airport_id }),
            ));
        }

        Ok(airport)
    }

    /// Returns every airport linked to an airline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline does not exist.
    pub async fn find_airports_from_airline(
        &self,
        airline_id: &str,
    ) -> Result<Vec<Airport>, AppError> {
        Ok(self.load_airline(airline_id).await?.airports)
    }

    /// Replaces the airline's airport collection with exactly `airport_ids`.
    ///
    /// Every id is checked before anything is written. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airline or any listed airport does not exist.
    pub async fn update_airports_from_airline(
        &self,
        airline_id: &str,
        airport_ids: &[String],
    ) -> Result<Airline, AppError> {
        let airline = self.load_airline(airline_id).await?;

        let mut resolved: Vec<Uuid> = Vec::with_capacity(airport_ids.len());
        for airport_id in airport_ids {
            let airport = self.load_airport(airport_id).await?;
            if !resolved.contains(&airport.id) {
                resolved.push(airport.id);
            }
        }

        let count = resolved.len();
        self.airlines.replace_airports(airline.id, resolved).await?;
        tracing::info!(airline_id = %airline.id, airports = count, "Airline airports replaced");

        self.load_airline(airline_id).await
    }

    /// Unlinks an airport from an airline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either entity does not exist.
    /// Returns [`AppError::PreconditionFailed`] if the airport is not linked
    /// to the airline, including when the link disappears before the delete.
    pub async fn delete_airport_from_airline(
        &self,
        airline_id: &str,
        airport_id: &str,
    ) -> Result<(), AppError> {
        let airport = self.load_airport(airport_id).await?;
        let airline = self.load_airline(airline_id).await?;

        if !airline.has_airport(airport.id) {
            return Err(AppError::precondition_failed(
                NOT_ASSOCIATED,
                json!({ "airline_id": airline_id, "airport_id": airport_id }),
            ));
        }

        if !self.airlines.remove_airport(airline.id, airport.id).await? {
            return Err(AppError::precondition_failed(
                NOT_ASSOCIATED,
                json!({ "airline_id": airline_id, "airport_id": airport_id }),
            ));
        }
        tracing::info!(airline_id = %airline.id, airport_id = %airport.id, "Airport unlinked from airline");

        Ok(())
    }

    async fn load_airline(&self, id: &str) -> Result<Airline, AppError> {
        let Some(uuid) = parse_id(id) else {
            return Err(airline_not_found(id));
        };

        self.airlines
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| airline_not_found(id))
    }

    async fn load_airport(&self, id: &str) -> Result<Airport, AppError> {
        let Some(uuid) = parse_id(id) else {
            return Err(airport_not_found(id));
        };

        self.airports
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| airport_not_found(id))
    }
}
