use std::collections::HashSet;

use chrono::NaiveDate;
use slotbook_core::{calendar, errors::BookingResult};
use slotbook_db::repositories::appointment::AppointmentRepository;

/// Free slot labels for `date`, in calendar order.
///
/// A fully booked day yields an empty list rather than an error.
pub async fn available_slots(
    repo: &dyn AppointmentRepository,
    date: NaiveDate,
) -> BookingResult<Vec<String>> {
    let booked: HashSet<String> = repo
        .find_by_date(date)
        .await?
        .into_iter()
        .map(|appointment| calendar::slot_label(appointment.time_slot))
        .collect();

    let free: Vec<String> = calendar::generate_time_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect();

    tracing::debug!(%date, booked = booked.len(), free = free.len(), "Computed availability");

    Ok(free)
}
