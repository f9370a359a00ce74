//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod airline_airports;
pub mod airlines;
pub mod airports;
pub mod health;

pub use airlines::{
    create_airline_handler, delete_airline_handler, get_airline_handler, list_airlines_handler,
    update_airline_handler,
};
pub use airports::{
    create_airport_handler, delete_airport_handler, get_airport_handler, list_airports_handler,
    update_airport_handler,
};
pub use health::health_handler;
