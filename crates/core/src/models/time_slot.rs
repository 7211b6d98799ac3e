use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Length of one bookable slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of half-hour steps in a day.
pub const HALF_HOURS_PER_DAY: u8 = 48;

/// Timezone label appended to every display label. No conversion is applied.
pub const DISPLAY_TIMEZONE: &str = "CST";

/// A bookable half-hour slot, stored as the number of half hours since
/// midnight.
///
/// The 24-hour machine value (`17:30`) and the 12-hour display label
/// (`5:30 PM CST`) are both derived from the same count, so they can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "SlotOption", try_from = "SlotOption")]
pub struct TimeSlot {
    half_hour: u8,
}

impl TimeSlot {
    /// Builds a slot from its half-hour index (`0` is midnight, `47` is 23:30).
    pub fn from_half_hours(half_hour: u8) -> Option<Self> {
        (half_hour < HALF_HOURS_PER_DAY).then_some(Self { half_hour })
    }

    /// Builds a slot from a wall-clock hour and minute. Only `:00` and `:30`
    /// are slot boundaries.
    pub fn from_hour_minute(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 {
            return None;
        }
        let half = match minute {
            0 => 0,
            30 => 1,
            _ => return None,
        };
        Self::from_half_hours((hour * 2 + half) as u8)
    }

    pub fn half_hours(&self) -> u8 {
        self.half_hour
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.half_hour / 2)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.half_hour % 2) * SLOT_MINUTES
    }

    /// Fractional hour, e.g. `17.5` for 17:30.
    pub fn fractional_hour(&self) -> f64 {
        f64::from(self.half_hour) / 2.0
    }

    /// The 24-hour `HH:MM` form submitted with the booking form.
    pub fn value(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// The visible option text, e.g. `5:30 PM CST`.
    pub fn label(&self) -> String {
        format!("{} {}", format_12_hour(self.hour(), self.minute()), DISPLAY_TIMEZONE)
    }

    pub fn time(&self) -> NaiveTime {
        // hour < 24 and minute is 0 or 30
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Parses a 24-hour machine value such as `08:00` or `21:30`.
    pub fn parse_value(value: &str) -> BookingResult<Self> {
        let invalid = || BookingError::Validation(format!("Invalid time value: {value:?}"));

        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        Self::from_hour_minute(hour, minute).ok_or_else(invalid)
    }

    /// Parses a display label such as `5:30 PM CST` back into a slot. The
    /// timezone suffix is optional.
    pub fn parse_label(label: &str) -> BookingResult<Self> {
        let invalid = || BookingError::Validation(format!("Invalid time label: {label:?}"));

        let mut parts = label.split_whitespace();
        let clock = parts.next().ok_or_else(invalid)?;
        let period = parts.next().ok_or_else(invalid)?;
        match parts.next() {
            None => {}
            Some(zone) if zone == DISPLAY_TIMEZONE => {}
            Some(_) => return Err(invalid()),
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }

        let hour = match (period, hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return Err(invalid()),
        };

        Self::from_hour_minute(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Formats a wall-clock time as `H:MM AM/PM`.
///
/// Hour 0 displays as 12 (AM) and hours 13-23 have 12 subtracted.
pub fn format_12_hour(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}

/// Wire form of a [`TimeSlot`]: a select option with its submitted value and
/// visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    pub value: String,
    pub label: String,
}

impl From<TimeSlot> for SlotOption {
    fn from(slot: TimeSlot) -> Self {
        Self {
            value: slot.value(),
            label: slot.label(),
        }
    }
}

impl TryFrom<SlotOption> for TimeSlot {
    type Error = BookingError;

    fn try_from(option: SlotOption) -> Result<Self, Self::Error> {
        let slot = TimeSlot::parse_value(&option.value)?;
        if slot.label() != option.label {
            return Err(BookingError::Validation(format!(
                "Label {:?} does not match value {:?}",
                option.label, option.value
            )));
        }
        Ok(slot)
    }
}
