//! PostgreSQL implementation of the airline repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::rows::{AirlineRow, LinkedAirportRow};
use crate::domain::entities::{Airline, Airport, NewAirline, airline_not_found};
use crate::domain::repositories::AirlineRepository;
use crate::error::AppError;

/// PostgreSQL repository for airlines and the `airline_airports` join table.
///
/// Airports are loaded with a second query over the join table and attached
/// to their airlines in memory.
pub struct PgAirlineRepository {
    pool: Arc<PgPool>,
}

impl PgAirlineRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn with_airports(&self, rows: Vec<AirlineRow>) -> Result<Vec<Airline>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let linked = sqlx::query_as::<_, LinkedAirportRow>(
            r#"
            SELECT aa.airline_id, ap.id, ap.name, ap.code, ap.country, ap.city
            FROM airline_airports aa
            JOIN airports ap ON ap.id = aa.airport_id
            WHERE aa.airline_id = ANY($1)
            ORDER BY ap.name, ap.id
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_airline: HashMap<Uuid, Vec<Airport>> = HashMap::new();
        for row in linked {
            by_airline
                .entry(row.airline_id)
                .or_default()
                .push(row.airport.into());
        }

        Ok(rows
            .into_iter()
            .map(|r| {
                let mut airline = Airline::from(r);
                airline.airports = by_airline.remove(&airline.id).unwrap_or_default();
                airline
            })
            .collect())
    }

    async fn one_with_airports(&self, row: AirlineRow) -> Result<Airline, AppError> {
        let id = row.id;
        self.with_airports(vec![row])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("Airline vanished while loading", json!({"id": id})))
    }
}

#[async_trait]
impl AirlineRepository for PgAirlineRepository {
    async fn find_all(&self) -> Result<Vec<Airline>, AppError> {
        let rows = sqlx::query_as::<_, AirlineRow>(
            r#"
            SELECT id, name, description, foundation_date, website
            FROM airlines
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_airports(rows).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        let row = sqlx::query_as::<_, AirlineRow>(
            r#"
            SELECT id, name, description, foundation_date, website
            FROM airlines
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.one_with_airports(row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_airline: NewAirline) -> Result<Airline, AppError> {
        let row = sqlx::query_as::<_, AirlineRow>(
            r#"
            INSERT INTO airlines (id, name, description, foundation_date, website)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, foundation_date, website
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_airline.name)
        .bind(new_airline.description)
        .bind(new_airline.foundation_date)
        .bind(new_airline.website)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn save(&self, airline: Airline) -> Result<Airline, AppError> {
        let row = sqlx::query_as::<_, AirlineRow>(
            r#"
            UPDATE airlines SET
                name            = $2,
                description     = $3,
                foundation_date = $4,
                website         = $5
            WHERE id = $1
            RETURNING id, name, description, foundation_date, website
            "#,
        )
        .bind(airline.id)
        .bind(airline.name)
        .bind(airline.description)
        .bind(airline.foundation_date)
        .bind(airline.website)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| airline_not_found(airline.id))?;

        self.one_with_airports(row).await
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM airlines WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(airline_not_found(id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM airlines")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO airline_airports (airline_id, airport_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(airline_id)
        .bind(airport_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM airline_airports WHERE airline_id = $1 AND airport_id = $2")
                .bind(airline_id)
                .bind(airport_id)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn replace_airports(
        &self,
        airline_id: Uuid,
        airport_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM airline_airports WHERE airline_id = $1")
            .bind(airline_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO airline_airports (airline_id, airport_id)
            SELECT $1, UNNEST($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(airline_id)
        .bind(&airport_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
