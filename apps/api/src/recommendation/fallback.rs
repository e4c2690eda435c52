//! Fallback Generator: fixed, preference-keyed recommendations served when the
//! model is unavailable or its output cannot be used. Pure and deterministic.

use crate::recommendation::models::{
    Preference, RecommendationResult, RecommendedSeat, UserPreferences,
};

/// Best seat reported when the seat list is empty.
const DEFAULT_BEST_SEAT: &str = "12A";

type FixedSeat = (&'static str, u32, &'static str);

const SUNRISE_EASTBOUND: &[FixedSeat] = &[
    ("12A", 90, "Left window seat - perfect for sunrise views on eastbound flights"),
    ("15A", 85, "Left window seat - excellent sunrise visibility"),
    ("8A", 80, "Left window seat - good sunrise viewing angle"),
];

const SUNRISE_OTHER: &[FixedSeat] = &[
    ("12F", 90, "Right window seat - good for sunrise views"),
    ("15F", 85, "Right window seat - excellent visibility"),
];

const SUNSET_WESTBOUND: &[FixedSeat] = &[
    ("12F", 90, "Right window seat - perfect for sunset views on westbound flights"),
    ("15F", 85, "Right window seat - excellent sunset visibility"),
];

const SUNSET_OTHER: &[FixedSeat] = &[
    ("12A", 90, "Left window seat - good for sunset views"),
    ("15A", 85, "Left window seat - excellent visibility"),
];

const ANY_VIEW: &[FixedSeat] = &[
    ("12A", 85, "Left window seat - good for both sunrise and sunset"),
    ("12F", 85, "Right window seat - good for both sunrise and sunset"),
    ("15A", 80, "Left window seat - balanced viewing options"),
];

fn seats_for(preferences: &UserPreferences) -> &'static [FixedSeat] {
    match preferences.preference {
        Preference::Sunrise if preferences.heads("east") => SUNRISE_EASTBOUND,
        Preference::Sunrise => SUNRISE_OTHER,
        Preference::Sunset if preferences.heads("west") => SUNSET_WESTBOUND,
        Preference::Sunset => SUNSET_OTHER,
        Preference::Other(_) => ANY_VIEW,
    }
}

/// Builds the fallback recommendation for `preferences`.
///
/// With `error_message` set, every reason is replaced by
/// `"Fallback: {error_message}"` so the caller can see why the model path was
/// skipped. That text is diagnostic only.
pub fn fallback_recommendations(
    preferences: &UserPreferences,
    error_message: Option<&str>,
) -> RecommendationResult {
    let recommended_seats: Vec<RecommendedSeat> = seats_for(preferences)
        .iter()
        .map(|&(seat_number, score, reason)| RecommendedSeat {
            seat_number: seat_number.to_string(),
            score,
            reason: match error_message {
                Some(msg) => format!("Fallback: {msg}"),
                None => reason.to_string(),
            },
        })
        .collect();

    let best_seat = recommended_seats
        .first()
        .map(|s| s.seat_number.clone())
        .unwrap_or_else(|| DEFAULT_BEST_SEAT.to_string());

    RecommendationResult {
        recommended_seats,
        best_seat,
        summary: format!(
            "Best seat for {} views on {}bound flight",
            preferences.preference, preferences.flight_direction
        ),
    }
}
