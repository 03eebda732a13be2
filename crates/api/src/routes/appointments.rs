use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

// Trailing-slash variants are what the browser booking widget requests.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/available-slots",
            get(handlers::availability::available_slots),
        )
        .route(
            "/api/available-slots/",
            get(handlers::availability::available_slots),
        )
        .route("/api/book", post(handlers::booking::book_appointment))
        .route("/api/book/", post(handlers::booking::book_appointment))
}
