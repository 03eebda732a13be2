use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use slotbook_core::models::appointment::BookAppointmentResponse;
use slotbook_db::{
    mock::repositories::MockAppointmentRepo,
    repositories::appointment::{AppointmentRepository, InsertOutcome},
};

use crate::test_utils::{server_with_mock, TestContext};

fn alice() -> Value {
    json!({
        "name": "Alice",
        "phoneNumber": "555-1234",
        "date": "2024-06-10",
        "timeSlot": "10:00"
    })
}

#[tokio::test]
async fn test_book_appointment_success() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/book").json(&alice()).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<BookAppointmentResponse>();
    assert_eq!(body.message, "Appointment booked successfully");
    assert_eq!(body.appointment.id, 1);
    assert_eq!(body.appointment.name, "Alice");
    assert_eq!(body.appointment.phone, "555-1234");
    assert_eq!(body.appointment.date, "2024-06-10");
    assert_eq!(body.appointment.time_slot, "10:00");

    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    assert!(ctx
        .appointments
        .exists_by_date_and_slot(date, NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_response_uses_client_field_names() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/book/").json(&alice()).await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "message": "Appointment booked successfully",
        "appointment": {
            "id": 1,
            "name": "Alice",
            "phone": "555-1234",
            "date": "2024-06-10",
            "timeSlot": "10:00"
        }
    }));
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/book")
        .json(&alice())
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .post("/api/book")
        .json(&json!({
            "name": "Bob",
            "phoneNumber": "555-9999",
            "date": "2024-06-10",
            "timeSlot": "10:00"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "error": "This slot is already booked." }));

    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let stored = ctx.appointments.find_by_date(date).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Alice");
}

#[tokio::test]
async fn test_booking_removes_slot_from_availability() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/book")
        .json(&alice())
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .get("/api/available-slots")
        .add_query_param("date", "2024-06-10")
        .await;
    let body = response.json::<Value>();
    let slots = body["availableSlots"].as_array().unwrap();

    assert_eq!(slots.len(), 11);
    assert!(!slots.contains(&json!("10:00")));
}

#[rstest]
#[case(json!({}), "Missing required fields.")]
#[case(json!({ "name": "Alice", "date": "2024-06-10", "timeSlot": "10:00" }), "Missing required fields.")]
#[case(json!({ "name": "", "phoneNumber": "555", "date": "2024-06-10", "timeSlot": "10:00" }), "Missing required fields.")]
#[case(json!({ "name": "Alice", "phoneNumber": "555", "date": "2024-13-01", "timeSlot": "10:00" }), "Invalid date format. Use YYYY-MM-DD.")]
#[case(json!({ "name": "Alice", "phoneNumber": "555", "date": "2024-06-10", "timeSlot": "10h" }), "Invalid time format. Use HH:MM (24-hour).")]
#[case(json!({ "name": "Alice", "phoneNumber": "555", "date": "2024-06-10", "timeSlot": "10:15" }), "Time slot is not one of the offered appointment times.")]
#[tokio::test]
async fn test_invalid_booking_creates_nothing(#[case] payload: Value, #[case] message: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/book").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": message }));
    assert!(ctx.appointments.is_empty().await);
}

#[tokio::test]
async fn test_numeric_phone_number_is_accepted() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/book")
        .json(&json!({
            "name": "Alice",
            "phoneNumber": 5551234,
            "date": "2024-06-10",
            "timeSlot": "10:00"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<BookAppointmentResponse>();
    assert_eq!(body.appointment.phone, "5551234");
}

#[tokio::test]
async fn test_wrong_field_type_is_a_json_validation_error() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/book")
        .json(&json!({
            "name": { "first": "Alice" },
            "phoneNumber": "555-1234",
            "date": "2024-06-10",
            "timeSlot": "10:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing required fields." }));
    assert!(ctx.appointments.is_empty().await);
}

#[tokio::test]
async fn test_malformed_json_body_is_a_json_validation_error() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/book")
        .bytes("{bad".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing required fields." }));
    assert!(ctx.appointments.is_empty().await);
}

#[tokio::test]
async fn test_non_json_content_type_is_a_json_validation_error() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/book").text("not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing required fields." }));
    assert!(ctx.appointments.is_empty().await);
}

#[tokio::test]
async fn test_padded_date_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/book")
        .json(&json!({
            "name": "Alice",
            "phoneNumber": "555-1234",
            "date": " 2024-06-10",
            "timeSlot": "10:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid date format. Use YYYY-MM-DD." }));
    assert!(ctx.appointments.is_empty().await);
}

#[tokio::test]
async fn test_store_failure_is_generic_server_error() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_insert()
        .withf(|appointment| appointment.name == "Alice")
        .times(1)
        .returning(|_| Err(eyre::eyre!("duplicate key in unexpected index")));
    let server = server_with_mock(repo);

    let response = server.post("/api/book").json(&alice()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Internal server error." }));
}

#[tokio::test]
async fn test_slot_taken_outcome_maps_to_conflict() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_insert()
        .times(1)
        .returning(|_| Ok(InsertOutcome::SlotTaken));
    // Booking relies on the atomic insert alone, never a separate pre-check
    repo.expect_exists_by_date_and_slot()
        .with(predicate::always(), predicate::always())
        .never();
    let server = server_with_mock(repo);

    let response = server.post("/api/book").json(&alice()).await;

    response.assert_status(StatusCode::CONFLICT);
}
