use axum::http::StatusCode;
use serde_json::json;
use slotbook_db::mock::repositories::MockAppointmentRepo;

use crate::test_utils::{server_with_mock, TestContext};

#[tokio::test]
async fn test_health_ok() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_ping()
        .returning(|| Err(eyre::eyre!("pool timed out")));
    let server = server_with_mock(repo);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    response.assert_json(&json!({ "status": "unavailable" }));
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "version": env!("CARGO_PKG_VERSION") }));
}
