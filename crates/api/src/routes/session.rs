use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/sessions", get(handlers::session::list_sessions))
        .route("/api/sessions/room", get(handlers::session::room_access))
        .route("/api/sessions/:id", get(handlers::session::get_session))
}
