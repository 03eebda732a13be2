//! In-process appointment store used by tests and local demos.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use slotbook_core::models::appointment::NewAppointment;
use tokio::sync::Mutex;

use crate::models::DbAppointment;
use crate::repositories::appointment::{AppointmentRepository, InsertOutcome};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    // Keyed by slot so the map itself enforces one booking per (date, time_slot)
    by_slot: BTreeMap<(NaiveDate, NaiveTime), DbAppointment>,
}

#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored appointments.
    pub async fn len(&self) -> usize {
        self.state.lock().await.by_slot.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn insert(&self, appointment: &NewAppointment) -> Result<InsertOutcome> {
        let mut state = self.state.lock().await;
        let key = (appointment.date, appointment.time_slot);

        if state.by_slot.contains_key(&key) {
            return Ok(InsertOutcome::SlotTaken);
        }

        state.last_id += 1;
        let row = DbAppointment {
            id: state.last_id,
            name: appointment.name.clone(),
            phone: appointment.phone.clone(),
            date: appointment.date,
            time_slot: appointment.time_slot,
            created_at: Utc::now(),
        };
        state.by_slot.insert(key, row.clone());

        Ok(InsertOutcome::Created(row))
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<DbAppointment>> {
        let state = self.state.lock().await;
        let rows = state
            .by_slot
            .range((date, NaiveTime::MIN)..)
            .take_while(|((slot_date, _), _)| *slot_date == date)
            .map(|(_, row)| row.clone())
            .collect();

        Ok(rows)
    }

    async fn exists_by_date_and_slot(
        &self,
        date: NaiveDate,
        time_slot: NaiveTime,
    ) -> Result<bool> {
        Ok(self.state.lock().await.by_slot.contains_key(&(date, time_slot)))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
