use slotbook_core::{
    errors::{BookingError, BookingResult},
    models::appointment::{Appointment, NewAppointment},
    validation::MSG_SLOT_TAKEN,
};
use slotbook_db::repositories::appointment::{AppointmentRepository, InsertOutcome};

/// Books `appointment` into its slot.
///
/// The store performs the uniqueness check and the insert as one step, so two
/// concurrent requests for the same slot cannot both succeed.
pub async fn book_appointment(
    repo: &dyn AppointmentRepository,
    appointment: &NewAppointment,
) -> BookingResult<Appointment> {
    match repo.insert(appointment).await? {
        InsertOutcome::Created(row) => {
            tracing::info!(
                id = row.id,
                date = %row.date,
                time_slot = %row.time_slot,
                "Appointment booked"
            );
            Ok(row.into())
        }
        InsertOutcome::SlotTaken => {
            tracing::info!(
                date = %appointment.date,
                time_slot = %appointment.time_slot,
                "Rejected booking for taken slot"
            );
            Err(BookingError::Conflict(MSG_SLOT_TAKEN.to_string()))
        }
    }
}
