use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::aircraft::{Aircraft, NewAircraft};
use crate::models::flight::{Flight, FlightDetail, NewFlight};
use crate::store::EntityStore;

/// In-memory store for handler tests. Insertion order is preserved.
#[derive(Default)]
pub struct MemoryStore {
    aircraft: RwLock<Vec<Aircraft>>,
    flights: RwLock<Vec<Flight>>,
}

impl MemoryStore {
    fn detail(&self, flight: &Flight) -> FlightDetail {
        let aircraft = self
            .aircraft
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == flight.aircraft_id)
            .cloned();
        FlightDetail {
            flight: flight.clone(),
            aircraft,
        }
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, AppError> {
        Ok(self.aircraft.read().unwrap().clone())
    }

    async fn find_aircraft(&self, id: Uuid) -> Result<Option<Aircraft>, AppError> {
        Ok(self.aircraft.read().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create_aircraft(&self, aircraft: NewAircraft) -> Result<Aircraft, AppError> {
        let created = Aircraft {
            id: Uuid::new_v4(),
            model: aircraft.model,
            airline: aircraft.airline,
            total_rows: aircraft.total_rows,
            seats_per_row: aircraft.seats_per_row,
            configuration: aircraft.configuration,
            seats: aircraft.seats,
            created_at: Utc::now(),
        };
        self.aircraft.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_flights(&self) -> Result<Vec<FlightDetail>, AppError> {
        let flights = self.flights.read().unwrap().clone();
        Ok(flights.iter().map(|f| self.detail(f)).collect())
    }

    async fn find_flight(&self, id: Uuid) -> Result<Option<FlightDetail>, AppError> {
        let flight = self.flights.read().unwrap().iter().find(|f| f.id == id).cloned();
        Ok(flight.map(|f| self.detail(&f)))
    }

    async fn find_flights_by_route(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<FlightDetail>, AppError> {
        let flights = self.flights.read().unwrap().clone();
        Ok(flights
            .iter()
            .filter(|f| f.departure.city == departure_city && f.arrival.city == arrival_city)
            .map(|f| self.detail(f))
            .collect())
    }

    async fn create_flight(&self, flight: NewFlight) -> Result<Flight, AppError> {
        if self.find_aircraft(flight.aircraft_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "aircraft {} does not exist",
                flight.aircraft_id
            )));
        }
        let created = Flight {
            id: Uuid::new_v4(),
            flight_number: flight.flight_number,
            airline: flight.airline,
            departure: flight.departure,
            arrival: flight.arrival,
            aircraft_id: flight.aircraft_id,
            route: flight.route,
            created_at: Utc::now(),
        };
        self.flights.write().unwrap().push(created.clone());
        Ok(created)
    }
}
