//! Seat Filter: rule-based window-seat selection for the legacy
//! recommendation endpoint. No model involved.

use crate::models::aircraft::{Seat, SeatType, Side};
use crate::recommendation::models::Preference;

pub const MAX_FILTERED_SEATS: usize = 5;

/// Keeps window seats on the side that suits `preference`, in layout order,
/// capped at `MAX_FILTERED_SEATS`.
///
/// sunrise → left windows; sunset → right windows; anything else → all
/// windows. Availability is not considered.
pub fn filter_seats(seats: &[Seat], preference: &Preference) -> Vec<Seat> {
    let wanted_side = match preference {
        Preference::Sunrise => Some(Side::Left),
        Preference::Sunset => Some(Side::Right),
        Preference::Other(_) => None,
    };

    seats
        .iter()
        .filter(|s| s.seat_type == SeatType::Window)
        .filter(|s| wanted_side.map_or(true, |side| s.side == side))
        .take(MAX_FILTERED_SEATS)
        .cloned()
        .collect()
}
