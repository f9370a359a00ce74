#![allow(dead_code)]

use airline_registry::domain::entities::{Airline, Airport, NewAirline, NewAirport};
use airline_registry::domain::repositories::{AirlineRepository, AirportRepository};
use airline_registry::error::AppError;
use airline_registry::routes::app_router;
use airline_registry::state::AppState;
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    airlines: Vec<Airline>,
    airports: Vec<Airport>,
    links: Vec<(Uuid, Uuid)>,
}

/// In-memory store backing both repository traits, with the same
/// cascade and relation-loading behavior as the PostgreSQL tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn airline_with_airports(tables: &Tables, airline: &Airline) -> Airline {
        let mut airline = airline.clone();
        airline.airports = tables
            .links
            .iter()
            .filter(|(a, _)| *a == airline.id)
            .filter_map(|(_, p)| tables.airports.iter().find(|x| x.id == *p).cloned())
            .collect();
        airline
    }

    fn airport_with_airlines(tables: &Tables, airport: &Airport) -> Airport {
        let mut airport = airport.clone();
        airport.airlines = tables
            .links
            .iter()
            .filter(|(_, p)| *p == airport.id)
            .filter_map(|(a, _)| tables.airlines.iter().find(|x| x.id == *a).cloned())
            .collect();
        airport
    }
}

#[async_trait]
impl AirlineRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Airline>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.airlines
            .iter()
            .map(|a| Self::airline_with_airports(&t, a))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.airlines
            .iter()
            .find(|a| a.id == id)
            .map(|a| Self::airline_with_airports(&t, a)))
    }

    async fn create(&self, n: NewAirline) -> Result<Airline, AppError> {
        let airline = Airline::new(
            Uuid::new_v4(),
            n.name,
            n.description,
            n.foundation_date,
            n.website,
        );
        self.tables.lock().unwrap().airlines.push(airline.clone());
        Ok(airline)
    }

    async fn save(&self, airline: Airline) -> Result<Airline, AppError> {
        let mut t = self.tables.lock().unwrap();
        let Some(slot) = t.airlines.iter_mut().find(|a| a.id == airline.id) else {
            return Err(AppError::not_found("airline missing", json!({})));
        };
        let mut stored = airline;
        stored.airports = Vec::new();
        *slot = stored.clone();
        Ok(Self::airline_with_airports(&t, &stored))
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.airlines.len();
        t.airlines.retain(|a| a.id != id);
        if t.airlines.len() == before {
            return Err(AppError::not_found("airline missing", json!({})));
        }
        t.links.retain(|(a, _)| *a != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().airlines.len() as i64)
    }

    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        if !t.links.contains(&(airline_id, airport_id)) {
            t.links.push((airline_id, airport_id));
        }
        Ok(())
    }

    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<bool, AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.links.len();
        t.links.retain(|l| *l != (airline_id, airport_id));
        Ok(t.links.len() != before)
    }

    async fn replace_airports(
        &self,
        airline_id: Uuid,
        airport_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        t.links.retain(|(a, _)| *a != airline_id);
        for airport_id in airport_ids {
            if !t.links.contains(&(airline_id, airport_id)) {
                t.links.push((airline_id, airport_id));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AirportRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.airports
            .iter()
            .map(|a| Self::airport_with_airlines(&t, a))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.airports
            .iter()
            .find(|a| a.id == id)
            .map(|a| Self::airport_with_airlines(&t, a)))
    }

    async fn create(&self, n: NewAirport) -> Result<Airport, AppError> {
        let airport = Airport::new(Uuid::new_v4(), n.name, n.code, n.country, n.city);
        self.tables.lock().unwrap().airports.push(airport.clone());
        Ok(airport)
    }

    async fn save(&self, airport: Airport) -> Result<Airport, AppError> {
        let mut t = self.tables.lock().unwrap();
        let Some(slot) = t.airports.iter_mut().find(|a| a.id == airport.id) else {
            return Err(AppError::not_found("airport missing", json!({})));
        };
        let mut stored = airport;
        stored.airlines = Vec::new();
        *slot = stored.clone();
        Ok(Self::airport_with_airlines(&t, &stored))
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.airports.len();
        t.airports.retain(|a| a.id != id);
        if t.airports.len() == before {
            return Err(AppError::not_found("airport missing", json!({})));
        }
        t.links.retain(|(_, p)| *p != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().airports.len() as i64)
    }
}

/// Airline repository whose every call fails like an unreachable database.
pub struct UnavailableAirlines;

#[async_trait]
impl AirlineRepository for UnavailableAirlines {
    async fn find_all(&self) -> Result<Vec<Airline>, AppError> {
        Err(unavailable())
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Airline>, AppError> {
        Err(unavailable())
    }
    async fn create(&self, _n: NewAirline) -> Result<Airline, AppError> {
        Err(unavailable())
    }
    async fn save(&self, _a: Airline) -> Result<Airline, AppError> {
        Err(unavailable())
    }
    async fn remove(&self, _id: Uuid) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
    async fn add_airport(&self, _a: Uuid, _p: Uuid) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn remove_airport(&self, _a: Uuid, _p: Uuid) -> Result<bool, AppError> {
        Err(unavailable())
    }
    async fn replace_airports(&self, _a: Uuid, _p: Vec<Uuid>) -> Result<(), AppError> {
        Err(unavailable())
    }
}

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

pub fn create_test_state() -> AppState {
    let store = Arc::new(InMemoryStore::default());
    AppState::new(store.clone(), store)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub fn acme_air() -> Value {
    json!({
        "name": "Acme Air",
        "description": "Regional carrier",
        "foundation_date": "2000-01-01T00:00:00Z",
        "website": "http://a.com"
    })
}

pub fn el_dorado() -> Value {
    json!({
        "name": "El Dorado",
        "code": "BOG",
        "country": "Colombia",
        "city": "Bogota"
    })
}

/// Creates a resource through the API and returns its id.
pub async fn create(server: &TestServer, path: &str, body: Value) -> String {
    let response = server.post(path).json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}
