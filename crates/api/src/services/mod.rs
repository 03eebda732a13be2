//! Booking and availability logic. Services take already-validated values
//! and talk to the store through [`AppointmentRepository`].
//!
//! [`AppointmentRepository`]: slotbook_db::repositories::appointment::AppointmentRepository

pub mod availability;
pub mod booking;
