//! # SlotBook Core
//!
//! Domain types and pure rules for the booking site: the weekly availability
//! schedule, half-hour slot generation, the session-type catalog and booking
//! form validation. Nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod slots;
pub mod validation;

pub use errors::{BookingError, BookingResult, FieldError};
pub use slots::{generate_slots, generate_slots_for, parse_date};
