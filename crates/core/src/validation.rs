//! Form validation.
//!
//! Validators collect every failing field instead of stopping at the first
//! one, so the page can mark all invalid inputs at once.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    errors::{BookingError, BookingResult, FieldError},
    models::{
        availability::{DayClass, WeeklySchedule},
        booking::{BookingRequest, SPECIAL_REQUESTS_MAX_LEN, SessionWindow, ValidatedBooking},
        contact::{ContactMessage, ContactRequest},
        session::SessionCatalog,
        time_slot::TimeSlot,
    },
    slots::{generate_slots_for, parse_date},
};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PAST_DATE_MESSAGE: &str = "Please select a future date.";
pub const UNAVAILABLE_TIME_MESSAGE: &str = "Please select an available time.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accumulates field errors for one form submission.
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: Vec<FieldError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Returns the trimmed value when present, otherwise records a required
    /// field error.
    pub fn required<'a>(&mut self, field: &str, value: &'a str) -> Option<&'a str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.reject(field, REQUIRED_MESSAGE);
            None
        } else {
            Some(trimmed)
        }
    }

    /// Empty values are left to [`FormValidator::required`].
    pub fn email(&mut self, field: &str, value: &str) -> bool {
        if !value.is_empty() && !is_valid_email(value) {
            self.reject(field, EMAIL_MESSAGE);
            return false;
        }
        true
    }

    /// Checks the character count of `value` against optional bounds.
    pub fn length(
        &mut self,
        field: &str,
        value: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> bool {
        let len = value.chars().count();
        let message = match (min, max) {
            (Some(min), Some(max)) if len < min || len > max => {
                format!("Field must be between {min} and {max} characters long.")
            }
            (Some(min), None) if len < min => {
                format!("Field must be at least {min} characters long.")
            }
            (None, Some(max)) if len > max => {
                format!("Field cannot be longer than {max} characters.")
            }
            _ => return true,
        };
        self.reject(field, message);
        false
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn finish(self) -> BookingResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::InvalidForm(self.errors))
        }
    }
}

/// Validates a booking form submission against the catalog and the slots
/// actually offered on the requested date.
///
/// `today` is the current CST calendar date; bookings before it are rejected.
pub fn validate_booking(
    request: &BookingRequest,
    today: NaiveDate,
    schedule: &WeeklySchedule,
    catalog: &SessionCatalog,
) -> BookingResult<ValidatedBooking> {
    let mut form = FormValidator::new();

    let session = form
        .required("session_type", &request.session_type)
        .and_then(|id| match catalog.find(id) {
            Some(session) => Some(session),
            None => {
                form.reject("session_type", "Not a valid choice");
                None
            }
        });

    let date = form
        .required("booking_date", &request.booking_date)
        .and_then(|raw| match parse_date(raw) {
            Ok(date) if date < today => {
                form.reject("booking_date", PAST_DATE_MESSAGE);
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                form.reject("booking_date", "Not a valid date value.");
                None
            }
        });

    let slot = form
        .required("booking_time", &request.booking_time)
        .and_then(|raw| match TimeSlot::parse_value(raw) {
            Ok(slot) => Some(slot),
            Err(_) => {
                form.reject("booking_time", UNAVAILABLE_TIME_MESSAGE);
                None
            }
        });
    // A well-formed time must still be offered on the chosen date.
    let slot = match (slot, date) {
        (Some(slot), Some(date)) if !generate_slots_for(schedule, date).contains(slot) => {
            form.reject("booking_time", UNAVAILABLE_TIME_MESSAGE);
            None
        }
        (slot, _) => slot,
    };

    let special_requests = request
        .special_requests
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if let Some(text) = special_requests {
        form.length("special_requests", text, None, Some(SPECIAL_REQUESTS_MAX_LEN));
    }

    form.finish()?;

    // finish() only succeeds when every field above produced a value
    let (Some(session), Some(date), Some(slot)) = (session, date, slot) else {
        return Err(BookingError::Validation("Incomplete booking request".to_string()));
    };

    Ok(ValidatedBooking {
        session: session.clone(),
        date,
        classification: DayClass::of(date),
        slot,
        special_requests: special_requests.map(str::to_string),
        window: SessionWindow::new(date, slot, session.duration_minutes),
    })
}

/// Validates a contact form submission.
///
/// Name 2-100 characters, a valid email, subject 5-100 characters and a
/// message of 10-1000 characters. Values are trimmed before checking.
pub fn validate_contact(request: &ContactRequest) -> BookingResult<ContactMessage> {
    let mut form = FormValidator::new();

    let name = form.required("name", &request.name);
    if let Some(name) = name {
        form.length("name", name, Some(2), Some(100));
    }

    let email = form.required("email", &request.email);
    if let Some(email) = email {
        form.email("email", email);
    }

    let subject = form.required("subject", &request.subject);
    if let Some(subject) = subject {
        form.length("subject", subject, Some(5), Some(100));
    }

    let message = form.required("message", &request.message);
    if let Some(message) = message {
        form.length("message", message, Some(10), Some(1000));
    }

    form.finish()?;

    let (Some(name), Some(email), Some(subject), Some(message)) = (name, email, subject, message)
    else {
        return Err(BookingError::Validation("Incomplete contact request".to_string()));
    };

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}
