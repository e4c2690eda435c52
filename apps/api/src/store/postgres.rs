use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::aircraft::{Aircraft, AircraftRow, NewAircraft};
use crate::models::flight::{Flight, FlightDetail, FlightRow, NewFlight};
use crate::store::EntityStore;

const FLIGHT_COLUMNS: &str = "id, flight_number, airline, \
    departure_city, departure_airport, departure_time, \
    arrival_city, arrival_airport, arrival_time, \
    aircraft_id, route_type, route_distance, route_direction, created_at";

/// PostgreSQL-backed entity store. Seats live in a JSONB column on the
/// aircraft row; flights reference aircraft by foreign key.
pub struct PgEntityStore {
    pool: PgPool,
}

impl PgEntityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolves the aircraft reference of every flight with one extra query.
    async fn expand(&self, rows: Vec<FlightRow>) -> Result<Vec<FlightDetail>, AppError> {
        let mut ids: Vec<Uuid> = rows.iter().map(|r| r.aircraft_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let aircraft: HashMap<Uuid, Aircraft> = if ids.is_empty() {
            HashMap::new()
        } else {
            sqlx::query_as::<_, AircraftRow>("SELECT * FROM aircraft WHERE id = ANY($1)")
                .bind(&ids)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(|row| (row.id, Aircraft::from(row)))
                .collect()
        };

        rows.into_iter()
            .map(|row| -> Result<FlightDetail, AppError> {
                let flight = Flight::try_from(row)?;
                let aircraft = aircraft.get(&flight.aircraft_id).cloned();
                Ok(FlightDetail { flight, aircraft })
            })
            .collect()
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, AppError> {
        let rows = sqlx::query_as::<_, AircraftRow>("SELECT * FROM aircraft ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Aircraft::from).collect())
    }

    async fn find_aircraft(&self, id: Uuid) -> Result<Option<Aircraft>, AppError> {
        let row = sqlx::query_as::<_, AircraftRow>("SELECT * FROM aircraft WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Aircraft::from))
    }

    async fn create_aircraft(&self, aircraft: NewAircraft) -> Result<Aircraft, AppError> {
        let row = sqlx::query_as::<_, AircraftRow>(
            r#"
            INSERT INTO aircraft
                (id, model, airline, total_rows, seats_per_row, configuration, seats)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&aircraft.model)
        .bind(&aircraft.airline)
        .bind(aircraft.total_rows)
        .bind(aircraft.seats_per_row)
        .bind(&aircraft.configuration)
        .bind(Json(&aircraft.seats))
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Created aircraft {} ({}) with {} seats",
            row.id,
            row.model,
            row.seats.0.len()
        );
        Ok(Aircraft::from(row))
    }

    async fn list_flights(&self) -> Result<Vec<FlightDetail>, AppError> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY departure_time"
        ))
        .fetch_all(&self.pool)
        .await?;
        self.expand(rows).await
    }

    async fn find_flight(&self, id: Uuid) -> Result<Option<FlightDetail>, AppError> {
        let row = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.expand(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_flights_by_route(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<FlightDetail>, AppError> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights \
             WHERE departure_city = $1 AND arrival_city = $2 \
             ORDER BY departure_time"
        ))
        .bind(departure_city)
        .bind(arrival_city)
        .fetch_all(&self.pool)
        .await?;
        self.expand(rows).await
    }

    async fn create_flight(&self, flight: NewFlight) -> Result<Flight, AppError> {
        let aircraft_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM aircraft WHERE id = $1)")
                .bind(flight.aircraft_id)
                .fetch_one(&self.pool)
                .await?;
        if !aircraft_exists {
            return Err(AppError::Validation(format!(
                "aircraft {} does not exist",
                flight.aircraft_id
            )));
        }

        let row = sqlx::query_as::<_, FlightRow>(&format!(
            r#"
            INSERT INTO flights
                (id, flight_number, airline,
                 departure_city, departure_airport, departure_time,
                 arrival_city, arrival_airport, arrival_time,
                 aircraft_id, route_type, route_distance, route_direction)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {FLIGHT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&flight.flight_number)
        .bind(&flight.airline)
        .bind(&flight.departure.city)
        .bind(&flight.departure.airport)
        .bind(flight.departure.time)
        .bind(&flight.arrival.city)
        .bind(&flight.arrival.airport)
        .bind(flight.arrival.time)
        .bind(flight.aircraft_id)
        .bind(flight.route.route_type.as_str())
        .bind(flight.route.distance)
        .bind(flight.route.direction.map(|d| d.as_str()))
        .fetch_one(&self.pool)
        .await?;

        info!("Created flight {} ({})", row.id, row.flight_number);
        Ok(Flight::try_from(row)?)
    }
}
