use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use slotbook_core::models::appointment::Appointment;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time_slot: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            name: row.name,
            phone: row.phone,
            date: row.date,
            time_slot: row.time_slot,
            created_at: row.created_at,
        }
    }
}
