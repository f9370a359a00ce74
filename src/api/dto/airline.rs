//! DTOs for airline endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::airport::AirportItem;
use crate::domain::entities::{Airline, AirlinePatch, NewAirline};

/// Request body for `POST /airlines`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirlineRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// RFC 3339 timestamp; must lie in the past.
    pub foundation_date: DateTime<Utc>,

    #[validate(url(message = "Invalid URL format"))]
    pub website: String,
}

impl From<CreateAirlineRequest> for NewAirline {
    fn from(r: CreateAirlineRequest) -> Self {
        NewAirline {
            name: r.name,
            description: r.description,
            foundation_date: r.foundation_date,
            website: r.website,
        }
    }
}

/// Request body for `PUT /airlines/{id}`.
///
/// All fields are optional. Only provided fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAirlineRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    pub foundation_date: Option<DateTime<Utc>>,

    #[validate(url(message = "Invalid URL format"))]
    pub website: Option<String>,
}

impl From<UpdateAirlineRequest> for AirlinePatch {
    fn from(r: UpdateAirlineRequest) -> Self {
        AirlinePatch {
            name: r.name,
            description: r.description,
            foundation_date: r.foundation_date,
            website: r.website,
        }
    }
}

/// Airline fields without relations, used when nested inside an airport.
#[derive(Debug, Serialize)]
pub struct AirlineItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub foundation_date: DateTime<Utc>,
    pub website: String,
}

impl From<Airline> for AirlineItem {
    fn from(a: Airline) -> Self {
        AirlineItem {
            id: a.id,
            name: a.name,
            description: a.description,
            foundation_date: a.foundation_date,
            website: a.website,
        }
    }
}

/// Airline with its linked airports.
#[derive(Debug, Serialize)]
pub struct AirlineResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub foundation_date: DateTime<Utc>,
    pub website: String,
    pub airports: Vec<AirportItem>,
}

impl From<Airline> for AirlineResponse {
    fn from(a: Airline) -> Self {
        AirlineResponse {
            id: a.id,
            name: a.name,
            description: a.description,
            foundation_date: a.foundation_date,
            website: a.website,
            airports: a.airports.into_iter().map(AirportItem::from).collect(),
        }
    }
}
