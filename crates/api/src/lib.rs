//! # SlotBook API
//!
//! The API crate provides the web server for the booking site. It exposes the
//! bookable time slots for a date, the session catalog, booking form
//! validation and the session room access check as JSON endpoints.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Error mapping to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! All booking rules live in `slotbook-core`; handlers only translate between
//! HTTP and those pure functions.

/// Configuration module for API settings
pub mod config;
/// Extractors that report rejections as JSON errors
pub mod extract;
/// Request handlers that implement business logic
pub mod handlers;
/// Error handling middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};
use eyre::{Result, WrapErr};
use slotbook_core::models::{availability::WeeklySchedule, session::SessionCatalog};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Source of the business's current wall-clock time.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// System time shifted by a fixed offset from UTC.
    System(FixedOffset),
    /// A frozen instant, for tests.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System(offset) => Utc::now().with_timezone(offset).naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Shared application state that is accessible to all request handlers
///
/// Everything here is read-only after start-up.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Weekly availability used to generate slots
    pub schedule: WeeklySchedule,
    /// Session types offered for booking
    pub catalog: SessionCatalog,
    /// Clock used for "today" and room access checks
    pub clock: Clock,
}

impl ApiState {
    pub fn new(clock: Clock) -> Self {
        Self {
            schedule: WeeklySchedule::default(),
            catalog: SessionCatalog::default(),
            clock,
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot generation and weekly availability
        .merge(routes::availability::routes())
        // Session catalog and room access
        .merge(routes::session::routes())
        // Booking form validation
        .merge(routes::booking::routes())
        // Contact form validation
        .merge(routes::contact::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin {origin:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins))
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, configures routes and middleware, and serves HTTP
/// until the process is stopped.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = slotbook_api::config::ApiConfig::from_env()?;
/// slotbook_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(Clock::System(config.utc_offset()?)));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

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
