use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use slotbook_core::models::appointment::NewAppointment;

use crate::models::DbAppointment;
use crate::repositories::appointment::{AppointmentRepository, InsertOutcome};

// Mock repositories for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn insert(&self, appointment: &NewAppointment) -> eyre::Result<InsertOutcome>;

        async fn find_by_date(&self, date: NaiveDate) -> eyre::Result<Vec<DbAppointment>>;

        async fn exists_by_date_and_slot(
            &self,
            date: NaiveDate,
            time_slot: NaiveTime,
        ) -> eyre::Result<bool>;

        async fn ping(&self) -> eyre::Result<()>;
    }
}
