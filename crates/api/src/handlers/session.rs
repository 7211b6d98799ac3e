//! # Session Handlers
//!
//! Read-only access to the session catalog and the session room access check.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use slotbook_core::{
    errors::BookingError,
    models::{
        booking::{RoomAccess, SessionWindow},
        session::SessionType,
        time_slot::TimeSlot,
    },
    parse_date,
};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, extract::AppQuery, middleware::error_handling::AppError};

/// A catalog entry with its presentation strings
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: SessionType,
    pub price_display: String,
    pub choice_label: String,
    pub selection_message: String,
}

impl From<&SessionType> for SessionResponse {
    fn from(session: &SessionType) -> Self {
        Self {
            session: session.clone(),
            price_display: session.price_display(),
            choice_label: session.choice_label(),
            selection_message: session.selection_message(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionResponse>,
}

/// Query parameters for the room access check
///
/// All fields are optional so a missing parameter is reported by the handler
/// with a specific message instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct RoomQuery {
    pub session_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomAccessResponse {
    pub window: SessionWindow,
    pub access: RoomAccess,
    pub message: String,
}

/// Lists every session type in catalog order
pub async fn list_sessions(State(state): State<Arc<ApiState>>) -> Json<SessionListResponse> {
    Json(SessionListResponse {
        sessions: state.catalog.all().iter().map(SessionResponse::from).collect(),
    })
}

/// Fetches one session type by id
///
/// # Errors
///
/// * `BookingError::NotFound` - unknown session type
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.catalog.get(&id)?;
    Ok(Json(SessionResponse::from(session)))
}

/// Reports whether the session room for a booking can be entered now
///
/// # Endpoint
///
/// ```text
/// GET /api/sessions/room?session_type=deep_dive&date=2024-06-12&time=17:30
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidDateInput` - missing or unparseable date
/// * `BookingError::Validation` - missing session type or time, or a time
///   outside the day's availability
/// * `BookingError::NotFound` - unknown session type
pub async fn room_access(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<RoomQuery>,
) -> Result<Json<RoomAccessResponse>, AppError> {
    let session_type = query
        .session_type
        .ok_or_else(|| BookingError::Validation("Session type required".to_string()))?;
    let raw_date = query
        .date
        .ok_or_else(|| BookingError::InvalidDateInput("Date required".to_string()))?;
    let raw_time = query
        .time
        .ok_or_else(|| BookingError::Validation("Time required".to_string()))?;

    let session = state.catalog.get(&session_type)?;
    let date = parse_date(&raw_date)?;
    let slot = TimeSlot::parse_value(&raw_time)?;
    if !state.schedule.rule_for_date(date).contains(slot) {
        return Err(BookingError::Validation(format!(
            "{} is not a bookable time on {date}",
            slot.value()
        ))
        .into());
    }

    let window = SessionWindow::new(date, slot, session.duration_minutes);
    let access = window.access(state.clock.now());
    let message = match access {
        RoomAccess::NotYetOpen { .. } => window.opens_message(),
        RoomAccess::Open => "Session room is open.".to_string(),
        RoomAccess::Ended => "Session time has ended.".to_string(),
    };
    info!(session = %session.id, %date, time = %slot.value(), ?access, "room access check");

    Ok(Json(RoomAccessResponse {
        window,
        access,
        message,
    }))
}
