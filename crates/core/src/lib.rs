//! # Slotbook Core
//!
//! Domain types shared by the database and API crates: the error taxonomy,
//! the appointment wire models, the fixed slot calendar and the validation
//! layer that turns raw request strings into typed values.

pub mod calendar;
pub mod errors;
pub mod models;
pub mod validation;
