//! # Request Validation
//!
//! Every raw string that reaches the API passes through this module before
//! any service sees it. Checks run in a fixed order and the first failure
//! wins, so clients always get the same message for the same input.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    calendar,
    errors::{BookingError, BookingResult},
    models::appointment::{BookAppointmentRequest, NewAppointment},
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;

pub const MSG_DATE_REQUIRED: &str = "date parameter (YYYY-MM-DD) is required.";
pub const MSG_INVALID_DATE: &str = "Invalid date format. Use YYYY-MM-DD.";
pub const MSG_INVALID_TIME: &str = "Invalid time format. Use HH:MM (24-hour).";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields.";
pub const MSG_NAME_TOO_LONG: &str = "Name must be at most 100 characters.";
pub const MSG_PHONE_TOO_LONG: &str = "Phone number must be at most 20 characters.";
pub const MSG_SLOT_NOT_OFFERED: &str = "Time slot is not one of the offered appointment times.";
pub const MSG_SLOT_TAKEN: &str = "This slot is already booked.";

/// A booking request that has passed every check, paired with the strings
/// the client sent so they can be echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub appointment: NewAppointment,
    pub raw_date: String,
    pub raw_time_slot: String,
}

// chrono skips whitespace before numeric fields, so " 2024-06-10" would
// otherwise parse and then be echoed back with the space.
fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Parses a `YYYY-MM-DD` date. Whitespace anywhere in the value is rejected.
pub fn parse_date(value: &str) -> BookingResult<NaiveDate> {
    if has_whitespace(value) {
        return Err(BookingError::Validation(MSG_INVALID_DATE.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| BookingError::Validation(MSG_INVALID_DATE.to_string()))
}

/// Parses an `HH:MM` 24-hour time. Whitespace anywhere in the value is rejected.
pub fn parse_time(value: &str) -> BookingResult<NaiveTime> {
    if has_whitespace(value) {
        return Err(BookingError::Validation(MSG_INVALID_TIME.to_string()));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| BookingError::Validation(MSG_INVALID_TIME.to_string()))
}

/// Validates the `date` query parameter of an availability lookup.
pub fn validate_date_query(date: Option<&str>) -> BookingResult<NaiveDate> {
    match date {
        Some(value) if !value.trim().is_empty() => parse_date(value),
        _ => Err(BookingError::Validation(MSG_DATE_REQUIRED.to_string())),
    }
}

/// Returns the field as sent, provided it holds more than whitespace.
fn required(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|value| !value.trim().is_empty())
}

/// Validates a booking payload.
///
/// Order: presence of all four fields, date format, time format, field
/// lengths, then membership of the time in the slot calendar.
pub fn validate_booking(request: &BookAppointmentRequest) -> BookingResult<ValidatedBooking> {
    let (Some(name), Some(phone), Some(date), Some(time_slot)) = (
        required(&request.name),
        required(&request.phone_number),
        required(&request.date),
        required(&request.time_slot),
    ) else {
        return Err(BookingError::Validation(MSG_MISSING_FIELDS.to_string()));
    };

    let parsed_date = parse_date(date)?;
    let parsed_time = parse_time(time_slot)?;

    let name = name.trim();
    let phone = phone.trim();

    if name.chars().count() > NAME_MAX_LEN {
        return Err(BookingError::Validation(MSG_NAME_TOO_LONG.to_string()));
    }
    if phone.chars().count() > PHONE_MAX_LEN {
        return Err(BookingError::Validation(MSG_PHONE_TOO_LONG.to_string()));
    }
    if !calendar::is_canonical_slot(parsed_time) {
        return Err(BookingError::Validation(MSG_SLOT_NOT_OFFERED.to_string()));
    }

    Ok(ValidatedBooking {
        appointment: NewAppointment {
            name: name.to_string(),
            phone: phone.to_string(),
            date: parsed_date,
            time_slot: parsed_time,
        },
        raw_date: date.to_string(),
        raw_time_slot: time_slot.to_string(),
    })
}
