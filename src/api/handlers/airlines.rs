//! Handlers for airline endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::airline::{AirlineResponse, CreateAirlineRequest, UpdateAirlineRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all airlines with their airports.
///
/// # Endpoint
///
/// `GET /airlines`
pub async fn list_airlines_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AirlineResponse>>, AppError> {
    let airlines = state.airline_service.find_all().await?;

    Ok(Json(airlines.into_iter().map(AirlineResponse::from).collect()))
}

/// Returns one airline with its airports.
///
/// # Endpoint
///
/// `GET /airlines/{id}`
///
/// # Errors
///
/// Returns 404 if the airline does not exist.
pub async fn get_airline_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AirlineResponse>, AppError> {
    let airline = state.airline_service.find_one(&id).await?;

    Ok(Json(airline.into()))
}

/// Creates an airline.
///
/// # Endpoint
///
/// `POST /airlines`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Acme Air",
///   "description": "Regional carrier",
///   "foundation_date": "2000-01-01T00:00:00Z",
///   "website": "http://a.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not JSON of this shape, a field is empty or
/// the website is not a URL.
/// Returns 412 if the foundation date is not in the past.
pub async fn create_airline_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateAirlineRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AirlineResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let airline = state.airline_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(airline.into())))
}

/// Updates an airline. Only provided fields are changed.
///
/// # Endpoint
///
/// `PUT /airlines/{id}`
///
/// # Errors
///
/// Returns 400 if a provided field fails validation.
/// Returns 404 if the airline does not exist.
/// Returns 412 if the new foundation date is in the future.
pub async fn update_airline_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateAirlineRequest>, JsonRejection>,
) -> Result<Json<AirlineResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let airline = state.airline_service.update(&id, payload.into()).await?;

    Ok(Json(airline.into()))
}

/// Deletes an airline and its airport links.
///
/// # Endpoint
///
/// `DELETE /airlines/{id}`
///
/// # Errors
///
/// Returns 404 if the airline does not exist.
pub async fn delete_airline_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.airline_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
