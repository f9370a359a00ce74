//! Business logic services for the application layer.

pub mod airline_airport_service;
pub mod airline_service;
pub mod airport_service;

pub use airline_airport_service::AirlineAirportService;
pub use airline_service::AirlineService;
pub use airport_service::AirportService;
