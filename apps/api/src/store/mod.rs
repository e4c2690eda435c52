//! Entity store: persistence seam for aircraft and flights.
//!
//! `AppState` holds an `Arc<dyn EntityStore>`. Production wires in
//! `PgEntityStore`; handler tests use the in-memory store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::aircraft::{Aircraft, NewAircraft};
use crate::models::flight::{Flight, FlightDetail, NewFlight};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgEntityStore;

/// Storage operations the HTTP layer relies on. Each call is atomic on its own;
/// there are no multi-call transactions.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, AppError>;

    async fn find_aircraft(&self, id: Uuid) -> Result<Option<Aircraft>, AppError>;

    async fn create_aircraft(&self, aircraft: NewAircraft) -> Result<Aircraft, AppError>;

    /// All flights, aircraft expanded.
    async fn list_flights(&self) -> Result<Vec<FlightDetail>, AppError>;

    async fn find_flight(&self, id: Uuid) -> Result<Option<FlightDetail>, AppError>;

    /// Flights whose departure and arrival cities match exactly.
    async fn find_flights_by_route(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<FlightDetail>, AppError>;

    /// Fails with `AppError::Validation` when `aircraft_id` does not exist.
    async fn create_flight(&self, flight: NewFlight) -> Result<Flight, AppError>;
}
