//! Handlers for the airports sub-resource of an airline.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::airline::AirlineResponse;
use crate::api::dto::airport::{AirportItem, AirportRef};
use crate::error::AppError;
use crate::state::AppState;

/// Links an airport to an airline.
///
/// # Endpoint
///
/// `POST /airlines/{airline_id}/airports/{airport_id}`
///
/// # Errors
///
/// Returns 404 if either the airline or the airport does not exist.
pub async fn add_airport_handler(
    Path((airline_id, airport_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<AirlineResponse>), AppError> {
    let airline = state
        .airline_airport_service
        .add_airport_to_airline(&airline_id, &airport_id)
        .await?;

    Ok((StatusCode::CREATED, Json(airline.into())))
}

/// Returns one airport linked to an airline.
///
/// # Endpoint
///
/// `GET /airlines/{airline_id}/airports/{airport_id}`
///
/// # Errors
///
/// Returns 404 if either entity does not exist or they are not linked.
pub async fn get_airport_handler(
    Path((airline_id, airport_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<AirportItem>, AppError> {
    let airport = state
        .airline_airport_service
        .find_airport_from_airline(&airline_id, &airport_id)
        .await?;

    Ok(Json(airport.into()))
}

/// Lists the airports linked to an airline.
///
/// # Endpoint
///
/// `GET /airlines/{airline_id}/airports`
pub async fn list_airports_handler(
    Path(airline_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AirportItem>>, AppError> {
    let airports = state
        .airline_airport_service
        .find_airports_from_airline(&airline_id)
        .await?;

    Ok(Json(airports.into_iter().map(AirportItem::from).collect()))
}

/// Replaces every airport linked to an airline.
///
/// # Endpoint
///
/// `PUT /airlines/{airline_id}/airports`
///
/// # Request Body
///
/// ```json
/// [{ "id": "2f0e..." }, { "id": "9b41..." }]
/// ```
///
/// An empty array clears the collection.
///
/// # Errors
///
/// Returns 404 if the airline or any listed airport does not exist.
pub async fn replace_airports_handler(
    Path(airline_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Vec<AirportRef>>, JsonRejection>,
) -> Result<Json<AirlineResponse>, AppError> {
    let Json(payload) = payload?;
    let airport_ids: Vec<String> = payload.into_iter().map(|r| r.id).collect();

    let airline = state
        .airline_airport_service
        .update_airports_from_airline(&airline_id, &airport_ids)
        .await?;

    Ok(Json(airline.into()))
}

/// Unlinks an airport from an airline. Neither entity is deleted.
///
/// # Endpoint
///
/// `DELETE /airlines/{airline_id}/airports/{airport_id}`
///
/// # Errors
///
/// Returns 404 if either entity does not exist.
/// Returns 412 if the airport is not linked to the airline.
pub async fn remove_airport_handler(
    Path((airline_id, airport_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .airline_airport_service
        .delete_airport_from_airline(&airline_id, &airport_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
