use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::aircraft::Aircraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Domestic,
    International,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Domestic => "domestic",
            RouteType::International => "international",
        }
    }
}

impl FromStr for RouteType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domestic" => Ok(RouteType::Domestic),
            "international" => Ok(RouteType::International),
            other => Err(anyhow!("unknown route type '{other}'")),
        }
    }
}

/// One of the eight compass points a route can head towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompassDirection {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl CompassDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::North => "north",
            CompassDirection::South => "south",
            CompassDirection::East => "east",
            CompassDirection::West => "west",
            CompassDirection::Northeast => "northeast",
            CompassDirection::Northwest => "northwest",
            CompassDirection::Southeast => "southeast",
            CompassDirection::Southwest => "southwest",
        }
    }
}

impl FromStr for CompassDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(CompassDirection::North),
            "south" => Ok(CompassDirection::South),
            "east" => Ok(CompassDirection::East),
            "west" => Ok(CompassDirection::West),
            "northeast" => Ok(CompassDirection::Northeast),
            "northwest" => Ok(CompassDirection::Northwest),
            "southeast" => Ok(CompassDirection::Southeast),
            "southwest" => Ok(CompassDirection::Southwest),
            other => Err(anyhow!("unknown compass direction '{other}'")),
        }
    }
}

/// Departure or arrival point of a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub city: String,
    pub airport: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// Great-circle distance in kilometres.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub direction: Option<CompassDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub aircraft_id: Uuid,
    pub route: Route,
    pub created_at: DateTime<Utc>,
}

/// A flight with its aircraft reference resolved. `aircraft` is `None` when the
/// referenced aircraft no longer exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetail {
    #[serde(flatten)]
    pub flight: Flight,
    pub aircraft: Option<Aircraft>,
}

/// Create payload for `POST /api/flights`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub flight_number: String,
    pub airline: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub aircraft_id: Uuid,
    pub route: Route,
}

impl NewFlight {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("flightNumber", &self.flight_number),
            ("airline", &self.airline),
            ("departure.city", &self.departure.city),
            ("departure.airport", &self.departure.airport),
            ("arrival.city", &self.arrival.city),
            ("arrival.airport", &self.arrival.airport),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
        }
        if matches!(self.route.distance, Some(d) if d < 0.0) {
            return Err("route.distance cannot be negative".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct FlightRow {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String,
    pub departure_city: String,
    pub departure_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_city: String,
    pub arrival_airport: String,
    pub arrival_time: DateTime<Utc>,
    pub aircraft_id: Uuid,
    pub route_type: String,
    pub route_distance: Option<f64>,
    pub route_direction: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<FlightRow> for Flight {
    type Error = anyhow::Error;

    fn try_from(row: FlightRow) -> Result<Self, Self::Error> {
        Ok(Flight {
            id: row.id,
            flight_number: row.flight_number,
            airline: row.airline,
            departure: FlightEndpoint {
                city: row.departure_city,
                airport: row.departure_airport,
                time: row.departure_time,
            },
            arrival: FlightEndpoint {
                city: row.arrival_city,
                airport: row.arrival_airport,
                time: row.arrival_time,
            },
            aircraft_id: row.aircraft_id,
            route: Route {
                route_type: row.route_type.parse()?,
                distance: row.route_distance,
                direction: row
                    .route_direction
                    .as_deref()
                    .map(CompassDirection::from_str)
                    .transpose()?,
            },
            created_at: row.created_at,
        })
    }
}
