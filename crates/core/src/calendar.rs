//! # Slot Calendar
//!
//! The fixed grid of bookable times for any day: half-hour slots from 10:00
//! until 17:00, with the 13:00 lunch hour left out.

use chrono::{NaiveTime, Timelike};

pub const OPENING_HOUR: u32 = 10;
pub const CLOSING_HOUR: u32 = 17;
pub const LUNCH_HOUR: u32 = 13;

const SLOT_MINUTES: [u32; 2] = [0, 30];

/// Returns the bookable time labels in calendar order (`"10:00"` through
/// `"16:30"`, twelve in total).
pub fn generate_time_slots() -> Vec<String> {
    (OPENING_HOUR..CLOSING_HOUR)
        .filter(|hour| *hour != LUNCH_HOUR)
        .flat_map(|hour| {
            SLOT_MINUTES
                .iter()
                .map(move |minute| format!("{:02}:{:02}", hour, minute))
        })
        .collect()
}

/// Formats a time the way slot labels are written.
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Whether `time` falls exactly on one of the calendar's slots.
pub fn is_canonical_slot(time: NaiveTime) -> bool {
    let hour = time.hour();
    (OPENING_HOUR..CLOSING_HOUR).contains(&hour)
        && hour != LUNCH_HOUR
        && SLOT_MINUTES.contains(&time.minute())
        && time.second() == 0
        && time.nanosecond() == 0
}
