//! # Slotbook API
//!
//! The web server for the Slotbook appointment service. It exposes two
//! endpoints, one listing the free slots of a day and one booking a slot,
//! plus health and version probes.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests and shape responses
//! - **Services**: Availability and booking logic over the appointment store
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven server settings
//!
//! The API uses Axum as the web framework. Storage sits behind the
//! `AppointmentRepository` trait, backed by Postgres in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Availability and booking logic
pub mod services;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use slotbook_db::repositories::appointment::AppointmentRepository;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use slotbook_api::ApiState;
/// use slotbook_db::mock::memory::InMemoryAppointmentRepository;
///
/// let state = Arc::new(ApiState {
///     appointments: Arc::new(InMemoryAppointmentRepository::new()),
/// });
/// let app = slotbook_api::build_router(state);
/// ```
pub struct ApiState {
    /// Store holding every booked appointment
    pub appointments: Arc<dyn AppointmentRepository>,
}

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability and booking endpoints
        .merge(routes::appointments::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins))
}

/// Starts the API server
///
/// Wraps the router with request tracing, a request timeout and, when
/// origins are configured, CORS, then serves until the process exits.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `appointments` - Appointment store shared by all requests
pub async fn start_server(
    config: config::ApiConfig,
    appointments: Arc<dyn AppointmentRepository>,
) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState { appointments });

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
