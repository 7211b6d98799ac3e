use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/available_times",
            get(handlers::availability::available_times),
        )
        .route(
            "/api/availability",
            get(handlers::availability::weekly_availability),
        )
}
