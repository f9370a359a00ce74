//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AirlineAirportService, AirlineService, AirportService};
use crate::domain::repositories::{AirlineRepository, AirportRepository};

/// Services shared across requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub airline_service: Arc<AirlineService>,
    pub airport_service: Arc<AirportService>,
    pub airline_airport_service: Arc<AirlineAirportService>,
}

impl AppState {
    /// Wires the services on top of the given storage ports.
    pub fn new(
        airlines: Arc<dyn AirlineRepository>,
        airports: Arc<dyn AirportRepository>,
    ) -> Self {
        Self {
            airline_service: Arc::new(AirlineService::new(airlines.clone())),
            airport_service: Arc::new(AirportService::new(airports.clone())),
            airline_airport_service: Arc::new(AirlineAirportService::new(airlines, airports)),
        }
    }
}
