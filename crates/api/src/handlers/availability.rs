//! # Availability Handlers
//!
//! Lists the free slots of a single day.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;
use slotbook_core::{
    models::availability::{AvailableSlotsQuery, AvailableSlotsResponse},
    validation,
};

use crate::{middleware::error_handling::AppError, services, ApiState};

/// Returns the free slots for a date
///
/// # Endpoint
///
/// ```text
/// GET /api/available-slots?date=2024-06-10
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - `date` is missing, repeated or not `YYYY-MM-DD`
/// * `BookingError::Database` - The store could not be read
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<AvailableSlotsQuery>, QueryRejection>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let Query(query) = query?;
    let date = validation::validate_date_query(query.date.as_deref())?;

    let available_slots =
        services::availability::available_slots(state.appointments.as_ref(), date).await?;

    Ok(Json(AvailableSlotsResponse { available_slots }))
}
