use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Confirmation message returned with every successful booking.
pub const BOOKING_CONFIRMATION: &str = "Appointment booked successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time_slot: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// A booking that has passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time_slot: NaiveTime,
}

/// Raw booking payload as posted by clients.
///
/// Every field is optional so that a missing key is reported as a validation
/// error instead of a JSON rejection. Numbers are accepted in place of
/// strings (a phone number typed into a numeric input arrives as one).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub time_slot: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(number) => number.to_string(),
        TextOrNumber::Float(number) => number.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    /// Date exactly as submitted.
    pub date: String,
    /// Time slot exactly as submitted.
    pub time_slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub message: String,
    pub appointment: AppointmentResponse,
}
