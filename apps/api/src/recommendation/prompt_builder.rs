//! Prompt Builder: renders flight, aircraft and preference data into the
//! single text prompt sent to the inference endpoint.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::aircraft::Seat;
use crate::recommendation::models::{AircraftContext, FlightContext, UserPreferences};
use crate::recommendation::prompts::RECOMMENDATION_PROMPT_TEMPLATE;

/// The inference endpoint rejects payloads of roughly 20 KB; stay under it.
pub const MAX_PROMPT_BYTES: usize = 18_000;

/// Number of seats shown to the model as concrete examples.
const EXAMPLE_SEAT_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error(
        "Prompt too large for the inference API ({bytes} bytes, limit {limit}). \
         Please reduce the number of available seats or shorten the custom prompt."
    )]
    TooLarge { bytes: usize, limit: usize },
}

/// Counts available seats per `"{seatType}_{side}"` key. Seats are available
/// unless explicitly flagged otherwise.
pub fn seat_summary(seats: &[Seat]) -> BTreeMap<String, usize> {
    let mut summary = BTreeMap::new();
    for seat in seats.iter().filter(|s| s.is_available) {
        *summary
            .entry(format!("{}_{}", seat.seat_type, seat.side))
            .or_insert(0) += 1;
    }
    summary
}

/// The first available seats in layout order. Illustrative only.
pub fn example_seats(seats: &[Seat]) -> Vec<&Seat> {
    seats
        .iter()
        .filter(|s| s.is_available)
        .take(EXAMPLE_SEAT_COUNT)
        .collect()
}

/// Renders the recommendation prompt.
///
/// Fails with `PromptError::TooLarge` instead of truncating when the result
/// exceeds `MAX_PROMPT_BYTES`.
pub fn build_prompt(
    flight: &FlightContext,
    aircraft: &AircraftContext,
    preferences: &UserPreferences,
    custom_prompt: Option<&str>,
) -> Result<String, PromptError> {
    let custom_line = custom_prompt
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!("\n- User's Custom Prompt: {c}"))
        .unwrap_or_default();

    // Serializing plain maps and derived structs cannot fail.
    let summary_json = serde_json::to_string(&seat_summary(&aircraft.seats)).unwrap_or_default();
    let examples_json =
        serde_json::to_string(&example_seats(&aircraft.seats)).unwrap_or_default();

    let total_rows = count_or_unknown(aircraft.total_rows);
    let seats_per_row = count_or_unknown(aircraft.seats_per_row);
    let prompt = render(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("model", or_unknown(&aircraft.model)),
            ("configuration", or_unknown(&aircraft.configuration)),
            ("total_rows", &total_rows),
            ("seats_per_row", &seats_per_row),
            ("departure_city", flight.departure_city().unwrap_or("Unknown")),
            ("arrival_city", flight.arrival_city().unwrap_or("Unknown")),
            ("flight_direction", &preferences.flight_direction),
            ("departure_time", &preferences.departure_time),
            ("preference", preferences.preference.as_str()),
            ("flight_date", flight.date.as_deref().unwrap_or("Today")),
            ("custom_prompt", &custom_line),
            ("seat_summary", &summary_json),
            ("example_seats", &examples_json),
        ],
    );

    let bytes = prompt.len();
    if bytes > MAX_PROMPT_BYTES {
        return Err(PromptError::TooLarge {
            bytes,
            limit: MAX_PROMPT_BYTES,
        });
    }

    Ok(prompt)
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text that happens to contain
/// a placeholder name comes out verbatim. Braces that do not enclose a known
/// name (the JSON example in the template) are copied as-is.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substitution = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match substitution {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "Unknown"
    } else {
        value
    }
}

fn count_or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "Unknown".to_string(), |v| v.to_string())
}
