//! # Availability Handlers
//!
//! Serves the bookable half-hour slots for a date and the weekly availability
//! table they are generated from.
//!
//! Slot generation itself is the pure `slotbook_core::generate_slots_for`;
//! the handler validates the date and shapes the select options.

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slotbook_core::{
    errors::BookingError,
    generate_slots_for,
    models::{
        availability::{DayAvailability, DayClass},
        time_slot::{DISPLAY_TIMEZONE, SlotOption},
    },
    parse_date,
};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiState, extract::AppQuery, middleware::error_handling::AppError};

/// Query parameters for the available times endpoint
#[derive(Debug, Deserialize)]
pub struct AvailableTimesQuery {
    /// Date in `YYYY-MM-DD` form
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailableTimesResponse {
    pub date: NaiveDate,
    pub classification: DayClass,
    pub timezone: String,
    pub times: Vec<SlotOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyAvailabilityResponse {
    pub timezone: String,
    pub days: Vec<DayAvailability>,
}

/// Lists the slots that can be booked on a date
///
/// # Endpoint
///
/// ```text
/// GET /api/available_times?date=2024-06-12
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidDateInput` - missing or unparseable date
pub async fn available_times(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<AvailableTimesQuery>,
) -> Result<Json<AvailableTimesResponse>, AppError> {
    let raw = query
        .date
        .ok_or_else(|| BookingError::InvalidDateInput("Date required".to_string()))?;
    let date = parse_date(&raw)?;

    let times: Vec<SlotOption> = generate_slots_for(&state.schedule, date)
        .into_iter()
        .map(SlotOption::from)
        .collect();
    debug!(%date, count = times.len(), "generated available times");

    Ok(Json(AvailableTimesResponse {
        date,
        classification: DayClass::of(date),
        timezone: DISPLAY_TIMEZONE.to_string(),
        times,
    }))
}

/// Returns the rule applied to each day of the week
pub async fn weekly_availability(
    State(state): State<Arc<ApiState>>,
) -> Json<WeeklyAvailabilityResponse> {
    Json(WeeklyAvailabilityResponse {
        timezone: DISPLAY_TIMEZONE.to_string(),
        days: state.schedule.days(),
    })
}
