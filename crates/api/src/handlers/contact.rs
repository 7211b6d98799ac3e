//! # Contact Handlers
//!
//! Validates contact form submissions. Delivery of the message is handled
//! elsewhere; this endpoint only accepts or rejects the form.

use axum::Json;
use slotbook_core::{
    models::contact::{ContactMessage, ContactRequest},
    validation,
};
use tracing::{info, warn};

use crate::{extract::AppJson, middleware::error_handling::AppError};

/// Validates a contact form
///
/// # Endpoint
///
/// ```text
/// POST /api/contact/validate
/// {"name": "Ada", "email": "ada@example.com", "subject": "...", "message": "..."}
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidForm` - one entry per rejected field
pub async fn validate_contact(
    AppJson(request): AppJson<ContactRequest>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = validation::validate_contact(&request)
        .inspect_err(|e| warn!(error = %e, "contact form rejected"))?;

    info!(subject = %message.subject, "contact form validated");
    Ok(Json(message))
}
