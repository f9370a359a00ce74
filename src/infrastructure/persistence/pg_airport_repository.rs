//! PostgreSQL implementation of the airport repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::rows::{AirportRow, LinkedAirlineRow};
use crate::domain::entities::{Airline, Airport, NewAirport, airport_not_found};
use crate::domain::repositories::AirportRepository;
use crate::error::AppError;

/// PostgreSQL repository for airports.
///
/// Reads attach the airlines linked through `airline_airports`.
pub struct PgAirportRepository {
    pool: Arc<PgPool>,
}

impl PgAirportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn with_airlines(&self, rows: Vec<AirportRow>) -> Result<Vec<Airport>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let linked = sqlx::query_as::<_, LinkedAirlineRow>(
            r#"
            SELECT aa.airport_id, al.id, al.name, al.description, al.foundation_date, al.website
            FROM airline_airports aa
            JOIN airlines al ON al.id = aa.airline_id
            WHERE aa.airport_id = ANY($1)
            ORDER BY al.name, al.id
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_airport: HashMap<Uuid, Vec<Airline>> = HashMap::new();
        for row in linked {
            by_airport
                .entry(row.airport_id)
                .or_default()
                .push(row.airline.into());
        }

        Ok(rows
            .into_iter()
            .map(|r| {
                let mut airport = Airport::from(r);
                airport.airlines = by_airport.remove(&airport.id).unwrap_or_default();
                airport
            })
            .collect())
    }

    async fn one_with_airlines(&self, row: AirportRow) -> Result<Airport, AppError> {
        let id = row.id;
        self.with_airlines(vec![row])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("Airport vanished while loading", json!({"id": id})))
    }
}

#[async_trait]
impl AirportRepository for PgAirportRepository {
    async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        let rows = sqlx::query_as::<_, AirportRow>(
            r#"
            SELECT id, name, code, country, city
            FROM airports
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_airlines(rows).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let row = sqlx::query_as::<_, AirportRow>(
            r#"
            SELECT id, name, code, country, city
            FROM airports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.one_with_airlines(row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_airport: NewAirport) -> Result<Airport, AppError> {
        let row = sqlx::query_as::<_, AirportRow>(
            r#"
            INSERT INTO airports (id, name, code, country, city)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, code, country, city
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_airport.name)
        .bind(new_airport.code)
        .bind(new_airport.country)
        .bind(new_airport.city)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn save(&self, airport: Airport) -> Result<Airport, AppError> {
        let row = sqlx::query_as::<_, AirportRow>(
            r#"
            UPDATE airports SET
                name    = $2,
                code    = $3,
                country = $4,
                city    = $5
            WHERE id = $1
            RETURNING id, name, code, country, city
            "#,
        )
        .bind(airport.id)
        .bind(airport.name)
        .bind(airport.code)
        .bind(airport.country)
        .bind(airport.city)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| airport_not_found(airport.id))?;

        self.one_with_airlines(row).await
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(airport_not_found(id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM airports")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
