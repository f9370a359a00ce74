//! API route configuration.

use crate::api::handlers::airline_airports;
use crate::api::handlers::{
    create_airline_handler, create_airport_handler, delete_airline_handler,
    delete_airport_handler, get_airline_handler, get_airport_handler, list_airlines_handler,
    list_airports_handler, update_airline_handler, update_airport_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Airline, airport and association routes.
///
/// # Endpoints
///
/// - `GET    /airlines`                           - List airlines with airports
/// - `POST   /airlines`                           - Create an airline
/// - `GET    /airlines/{id}`                      - Get one airline
/// - `PUT    /airlines/{id}`                      - Update an airline
/// - `DELETE /airlines/{id}`                      - Delete an airline
/// - `GET    /airlines/{id}/airports`             - List linked airports
/// - `PUT    /airlines/{id}/airports`             - Replace linked airports
/// - `POST   /airlines/{id}/airports/{airport_id}` - Link an airport
/// - `GET    /airlines/{id}/airports/{airport_id}` - Get one linked airport
/// - `DELETE /airlines/{id}/airports/{airport_id}` - Unlink an airport
/// - `GET    /airports`                           - List airports with airlines
/// - `POST   /airports`                           - Create an airport
/// - `GET    /airports/{id}`                      - Get one airport
/// - `PUT    /airports/{id}`                      - Update an airport
/// - `DELETE /airports/{id}`                      - Delete an airport
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/airlines",
            get(list_airlines_handler).post(create_airline_handler),
        )
        .route(
            "/airlines/{id}",
            get(get_airline_handler)
                .put(update_airline_handler)
                .delete(delete_airline_handler),
        )
        .route(
            "/airlines/{id}/airports",
            get(airline_airports::list_airports_handler)
                .put(airline_airports::replace_airports_handler),
        )
        .route(
            "/airlines/{id}/airports/{airport_id}",
            post(airline_airports::add_airport_handler)
                .get(airline_airports::get_airport_handler)
                .delete(airline_airports::remove_airport_handler),
        )
        .route(
            "/airports",
            get(list_airports_handler).post(create_airport_handler),
        )
        .route(
            "/airports/{id}",
            get(get_airport_handler)
                .put(update_airport_handler)
                .delete(delete_airport_handler),
        )
}
