use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use slotbook_core::{
    models::appointment::{
        AppointmentResponse, BookAppointmentRequest, BookAppointmentResponse,
        BOOKING_CONFIRMATION,
    },
    validation,
};

use crate::{middleware::error_handling::AppError, services, ApiState};

/// Books an appointment
///
/// # Endpoint
///
/// ```text
/// POST /api/book
/// {"name": "Alice", "phoneNumber": "555-1234", "date": "2024-06-10", "timeSlot": "10:00"}
/// ```
///
/// Responds `201 Created`. The date and time slot are echoed exactly as sent.
///
/// # Errors
///
/// * `BookingError::Validation` - Unreadable body, missing field, bad date or
///   time, or a time outside the slot calendar
/// * `BookingError::Conflict` - The slot is already booked
/// * `BookingError::Database` - The store could not be written
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookAppointmentResponse>), AppError> {
    let Json(payload) = payload?;
    let booking = validation::validate_booking(&payload)?;

    let appointment =
        services::booking::book_appointment(state.appointments.as_ref(), &booking.appointment)
            .await?;

    let response = BookAppointmentResponse {
        message: BOOKING_CONFIRMATION.to_string(),
        appointment: AppointmentResponse {
            id: appointment.id,
            name: appointment.name,
            phone: appointment.phone,
            date: booking.raw_date,
            time_slot: booking.raw_time_slot,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}
