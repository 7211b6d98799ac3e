//! # Booking Handlers
//!
//! Validates booking form submissions. Nothing is persisted here; a valid
//! booking is echoed back with its resolved session, slot and room window so
//! the page can move on to payment.

use axum::{Json, extract::State};
use slotbook_core::{
    models::booking::{BookingRequest, ValidatedBooking},
    validation,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{ApiState, extract::AppJson, middleware::error_handling::AppError};

/// Validates a booking form
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings/validate
/// {"session_type": "deep_dive", "booking_date": "2024-06-15", "booking_time": "08:00"}
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidForm` - one entry per rejected field
/// * `BookingError::Validation` - body is not JSON or has mistyped fields
pub async fn validate_booking(
    State(state): State<Arc<ApiState>>,
    AppJson(request): AppJson<BookingRequest>,
) -> Result<Json<ValidatedBooking>, AppError> {
    let today = state.clock.today();
    let booking = validation::validate_booking(&request, today, &state.schedule, &state.catalog)
        .inspect_err(|e| warn!(error = %e, "booking rejected"))?;

    info!(
        session = %booking.session.id,
        date = %booking.date,
        time = %booking.slot.value(),
        "booking validated"
    );
    Ok(Json(booking))
}
