//! Row types shared by the PostgreSQL repositories.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{Airline, Airport};

#[derive(Debug, FromRow)]
pub(super) struct AirlineRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub foundation_date: DateTime<Utc>,
    pub website: String,
}

impl From<AirlineRow> for Airline {
    fn from(r: AirlineRow) -> Self {
        Airline::new(r.id, r.name, r.description, r.foundation_date, r.website)
    }
}

#[derive(Debug, FromRow)]
pub(super) struct AirportRow {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

impl From<AirportRow> for Airport {
    fn from(r: AirportRow) -> Self {
        Airport::new(r.id, r.name, r.code, r.country, r.city)
    }
}

/// An airport joined through `airline_airports`, tagged with the airline it belongs to.
#[derive(Debug, FromRow)]
pub(super) struct LinkedAirportRow {
    pub airline_id: Uuid,
    #[sqlx(flatten)]
    pub airport: AirportRow,
}

/// An airline joined through `airline_airports`, tagged with the airport it belongs to.
#[derive(Debug, FromRow)]
pub(super) struct LinkedAirlineRow {
    pub airport_id: Uuid,
    #[sqlx(flatten)]
    pub airline: AirlineRow,
}
