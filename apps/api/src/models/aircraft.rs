use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Window,
    Aisle,
    Middle,
}

impl SeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatType::Window => "window",
            SeatType::Aisle => "aisle",
            SeatType::Middle => "middle",
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the cabin, seen facing the nose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub row: String,
    pub column: String,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub side: Side,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

/// Seat-layout template shared by every flight flown on the same airframe.
///
/// `seats.len() == total_rows * seats_per_row` is expected but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub id: Uuid,
    pub model: String,
    pub airline: String,
    pub total_rows: i32,
    pub seats_per_row: i32,
    pub configuration: String,
    pub seats: Vec<Seat>,
    pub created_at: DateTime<Utc>,
}

/// Create payload for `POST /api/seats/aircraft`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAircraft {
    pub model: String,
    pub airline: String,
    pub total_rows: i32,
    pub seats_per_row: i32,
    pub configuration: String,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl NewAircraft {
    /// Checks the required text fields and numeric bounds.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("model", &self.model),
            ("airline", &self.airline),
            ("configuration", &self.configuration),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
        }
        if self.total_rows <= 0 {
            return Err("totalRows must be positive".to_string());
        }
        if self.seats_per_row <= 0 {
            return Err("seatsPerRow must be positive".to_string());
        }
        if let Some(seat) = self.seats.iter().find(|s| s.seat_number.trim().is_empty()) {
            return Err(format!(
                "seat in row '{}' column '{}' has no seatNumber",
                seat.row, seat.column
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AircraftRow {
    pub id: Uuid,
    pub model: String,
    pub airline: String,
    pub total_rows: i32,
    pub seats_per_row: i32,
    pub configuration: String,
    pub seats: Json<Vec<Seat>>,
    pub created_at: DateTime<Utc>,
}

impl From<AircraftRow> for Aircraft {
    fn from(row: AircraftRow) -> Self {
        Aircraft {
            id: row.id,
            model: row.model,
            airline: row.airline,
            total_rows: row.total_rows,
            seats_per_row: row.seats_per_row,
            configuration: row.configuration,
            seats: row.seats.0,
            created_at: row.created_at,
        }
    }
}
