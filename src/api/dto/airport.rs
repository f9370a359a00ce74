//! DTOs for airport endpoints and the airline/airport sub-resource.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::airline::AirlineItem;
use crate::domain::entities::{Airport, AirportPatch, NewAirport};

/// Request body for `POST /airports`.
///
/// The three-character code rule is a business precondition enforced by the
/// service (412), not a shape check here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirportRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,

    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: String,

    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
}

impl From<CreateAirportRequest> for NewAirport {
    fn from(r: CreateAirportRequest) -> Self {
        NewAirport {
            name: r.name,
            code: r.code,
            country: r.country,
            city: r.city,
        }
    }
}

/// Request body for `PUT /airports/{id}`. Only provided fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAirportRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub code: Option<String>,

    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: Option<String>,

    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: Option<String>,
}

impl From<UpdateAirportRequest> for AirportPatch {
    fn from(r: UpdateAirportRequest) -> Self {
        AirportPatch {
            name: r.name,
            code: r.code,
            country: r.country,
            city: r.city,
        }
    }
}

/// Reference to an existing airport, used by `PUT /airlines/{id}/airports`.
#[derive(Debug, Deserialize)]
pub struct AirportRef {
    pub id: String,
}

/// Airport fields without relations, used when nested inside an airline.
#[derive(Debug, Serialize)]
pub struct AirportItem {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

impl From<Airport> for AirportItem {
    fn from(a: Airport) -> Self {
        AirportItem {
            id: a.id,
            name: a.name,
            code: a.code,
            country: a.country,
            city: a.city,
        }
    }
}

/// Airport with its linked airlines.
#[derive(Debug, Serialize)]
pub struct AirportResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
    pub airlines: Vec<AirlineItem>,
}

impl From<Airport> for AirportResponse {
    fn from(a: Airport) -> Self {
        AirportResponse {
            id: a.id,
            name: a.name,
            code: a.code,
            country: a.country,
            city: a.city,
            airlines: a.airlines.into_iter().map(AirlineItem::from).collect(),
        }
    }
}
