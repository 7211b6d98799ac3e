use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    availability::DayClass,
    session::SessionType,
    time_slot::{DISPLAY_TIMEZONE, TimeSlot, format_12_hour},
};

/// Minutes before the start time at which the session room opens.
pub const ROOM_OPENS_BEFORE_MINUTES: i64 = 15;

/// Minutes after the scheduled end at which the session room closes.
pub const ROOM_CLOSES_AFTER_MINUTES: i64 = 15;

/// Maximum length of the free-text special requests field.
pub const SPECIAL_REQUESTS_MAX_LEN: usize = 500;

/// Raw booking form submission. Every field arrives as text so that each one
/// can be reported individually when invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub session_type: String,
    #[serde(default)]
    pub booking_date: String,
    #[serde(default)]
    pub booking_time: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// A booking request that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedBooking {
    pub session: SessionType,
    pub date: NaiveDate,
    pub classification: DayClass,
    pub slot: TimeSlot,
    pub special_requests: Option<String>,
    pub window: SessionWindow,
}

/// Period during which the online session room can be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub starts_at: NaiveDateTime,
    pub opens_at: NaiveDateTime,
    pub closes_at: NaiveDateTime,
}

/// Whether the session room can be entered at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoomAccess {
    NotYetOpen { opens_at: NaiveDateTime },
    Open,
    Ended,
}

impl SessionWindow {
    /// Window for a session of `duration_minutes` starting at `slot` on
    /// `date`. All times are wall-clock CST.
    pub fn new(date: NaiveDate, slot: TimeSlot, duration_minutes: u32) -> Self {
        let starts_at = date.and_time(slot.time());
        Self {
            starts_at,
            opens_at: starts_at - Duration::minutes(ROOM_OPENS_BEFORE_MINUTES),
            closes_at: starts_at
                + Duration::minutes(i64::from(duration_minutes) + ROOM_CLOSES_AFTER_MINUTES),
        }
    }

    pub fn access(&self, now: NaiveDateTime) -> RoomAccess {
        if now < self.opens_at {
            RoomAccess::NotYetOpen {
                opens_at: self.opens_at,
            }
        } else if now > self.closes_at {
            RoomAccess::Ended
        } else {
            RoomAccess::Open
        }
    }

    /// e.g. `Session room opens at 5:15 PM CST`
    pub fn opens_message(&self) -> String {
        use chrono::Timelike;

        format!(
            "Session room opens at {} {}",
            format_12_hour(self.opens_at.hour(), self.opens_at.minute()),
            DISPLAY_TIMEZONE
        )
    }
}
