//! # Appointment Repository
//!
//! Persistence for booked appointments. The store owns the one-booking-per-slot
//! rule: `insert` is an atomic insert-if-absent that reports a taken slot as
//! [`InsertOutcome::SlotTaken`] instead of requiring callers to check first.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use slotbook_core::models::appointment::NewAppointment;
use sqlx::{Pool, Postgres};

use crate::models::DbAppointment;

/// Result of an insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Created(DbAppointment),
    SlotTaken,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Stores the appointment unless its (date, time_slot) is already booked.
    async fn insert(&self, appointment: &NewAppointment) -> Result<InsertOutcome>;

    /// All appointments on `date`, earliest slot first.
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<DbAppointment>>;

    async fn exists_by_date_and_slot(&self, date: NaiveDate, time_slot: NaiveTime)
        -> Result<bool>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<()>;
}

/// Postgres-backed repository. Relies on the `UNIQUE (date, time_slot)`
/// constraint created by [`crate::schema::initialize_database`].
#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: Pool<Postgres>,
}

impl PgAppointmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn insert(&self, appointment: &NewAppointment) -> Result<InsertOutcome> {
        let now = Utc::now();

        tracing::debug!(
            "Inserting appointment: date={}, time_slot={}",
            appointment.date,
            appointment.time_slot
        );

        let created = sqlx::query_as::<_, DbAppointment>(
            r#"
            INSERT INTO appointments (name, phone, date, time_slot, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (date, time_slot) DO NOTHING
            RETURNING id, name, phone, date, time_slot, created_at
            "#,
        )
        .bind(&appointment.name)
        .bind(&appointment.phone)
        .bind(appointment.date)
        .bind(appointment.time_slot)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        match created {
            Some(row) => {
                tracing::debug!("Appointment created: id={}", row.id);
                Ok(InsertOutcome::Created(row))
            }
            None => {
                tracing::debug!(
                    "Slot already taken: date={}, time_slot={}",
                    appointment.date,
                    appointment.time_slot
                );
                Ok(InsertOutcome::SlotTaken)
            }
        }
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<DbAppointment>> {
        let appointments = sqlx::query_as::<_, DbAppointment>(
            r#"
            SELECT id, name, phone, date, time_slot, created_at
            FROM appointments
            WHERE date = $1
            ORDER BY time_slot ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    async fn exists_by_date_and_slot(
        &self,
        date: NaiveDate,
        time_slot: NaiveTime,
    ) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM appointments
                WHERE date = $1 AND time_slot = $2
            );
            "#,
        )
        .bind(date)
        .bind(time_slot)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
