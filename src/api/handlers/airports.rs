//! Handlers for airport endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::airport::{AirportResponse, CreateAirportRequest, UpdateAirportRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all airports with their airlines.
///
/// # Endpoint
///
/// `GET /airports`
pub async fn list_airports_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AirportResponse>>, AppError> {
    let airports = state.airport_service.find_all().await?;

    Ok(Json(airports.into_iter().map(AirportResponse::from).collect()))
}

/// Returns one airport with its airlines.
///
/// # Endpoint
///
/// `GET /airports/{id}`
pub async fn get_airport_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AirportResponse>, AppError> {
    let airport = state.airport_service.find_one(&id).await?;

    Ok(Json(airport.into()))
}

/// Creates an airport.
///
/// # Endpoint
///
/// `POST /airports`
///
/// # Errors
///
/// Returns 400 if a field is empty.
/// Returns 412 if the code is not exactly three characters.
pub async fn create_airport_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateAirportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AirportResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let airport = state.airport_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(airport.into())))
}

/// Updates an airport. Only provided fields are changed.
///
/// # Endpoint
///
/// `PUT /airports/{id}`
///
/// # Errors
///
/// Returns 404 if the airport does not exist.
/// Returns 412 if a new code is not exactly three characters.
pub async fn update_airport_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateAirportRequest>, JsonRejection>,
) -> Result<Json<AirportResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let airport = state.airport_service.update(&id, payload.into()).await?;

    Ok(Json(airport.into()))
}

/// Deletes an airport and its airline links.
///
/// # Endpoint
///
/// `DELETE /airports/{id}`
pub async fn delete_airport_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.airport_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
