use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::aircraft::Seat;

/// What the passenger wants to see from the window.
///
/// Anything other than `sunrise`/`sunset` (the frontend sends `both`) is kept
/// verbatim in `Other` so it can be echoed back in summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Preference {
    Sunrise,
    Sunset,
    Other(String),
}

impl Preference {
    pub fn as_str(&self) -> &str {
        match self {
            Preference::Sunrise => "sunrise",
            Preference::Sunset => "sunset",
            Preference::Other(raw) => raw,
        }
    }
}

impl From<String> for Preference {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "sunrise" => Preference::Sunrise,
            "sunset" => Preference::Sunset,
            _ => Preference::Other(raw),
        }
    }
}

impl From<Preference> for String {
    fn from(preference: Preference) -> Self {
        match preference {
            Preference::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped passenger preferences. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub preference: Preference,
    /// Free-form heading, e.g. `east` or `west`.
    pub flight_direction: String,
    #[serde(default)]
    pub departure_time: String,
}

impl UserPreferences {
    /// Exact match, like `Preference` parsing: `East` is not `east`.
    pub fn heads(&self, direction: &str) -> bool {
        self.flight_direction == direction
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRef {
    #[serde(default)]
    pub city: Option<String>,
}

/// Flight data as the client sends it alongside a recommendation request.
/// Every field is optional; the prompt substitutes defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightContext {
    #[serde(default)]
    pub departure: Option<CityRef>,
    #[serde(default)]
    pub arrival: Option<CityRef>,
    #[serde(default)]
    pub date: Option<String>,
}

impl FlightContext {
    pub fn departure_city(&self) -> Option<&str> {
        self.departure.as_ref().and_then(|d| d.city.as_deref())
    }

    pub fn arrival_city(&self) -> Option<&str> {
        self.arrival.as_ref().and_then(|a| a.city.as_deref())
    }
}

/// Aircraft data as the client sends it alongside a recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftContext {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub total_rows: Option<u32>,
    #[serde(default)]
    pub seats_per_row: Option<u32>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// Body of `POST /api/ai/recommendations`.
///
/// The three data blocks are `Option` so that a missing block is reported as a
/// validation error naming it rather than as a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub flight_data: Option<FlightContext>,
    pub aircraft_data: Option<AircraftContext>,
    pub user_preferences: Option<UserPreferences>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSeat {
    pub seat_number: String,
    /// 0–100; bounds are requested from the model but not enforced.
    pub score: u32,
    pub reason: String,
}

/// The recommendation returned to the caller, either decoded from model
/// output or produced by the fallback generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub recommended_seats: Vec<RecommendedSeat>,
    pub best_seat: String,
    pub summary: String,
}
