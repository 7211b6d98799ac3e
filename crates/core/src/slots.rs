//! Half-hour slot generation.
//!
//! Slots are produced lazily from a [`SlotRange`], which is `Copy` and can be
//! iterated any number of times.

use chrono::NaiveDate;

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        availability::WeeklySchedule,
        time_slot::{HALF_HOURS_PER_DAY, TimeSlot},
    },
};

/// Half-open range of slots `[start, end)` in half-hour units.
///
/// An empty or inverted range yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    start: u8,
    end: u8,
}

impl SlotRange {
    pub fn new(start: u8, end: u8) -> Self {
        let end = end.min(HALF_HOURS_PER_DAY);
        Self {
            start: start.min(end),
            end,
        }
    }

    pub fn iter(&self) -> SlotIter {
        SlotIter {
            next: self.start,
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn first(&self) -> Option<TimeSlot> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<TimeSlot> {
        self.iter().next_back()
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        (self.start..self.end).contains(&slot.half_hours())
    }
}

impl IntoIterator for SlotRange {
    type Item = TimeSlot;
    type IntoIter = SlotIter;

    fn into_iter(self) -> SlotIter {
        self.iter()
    }
}

impl IntoIterator for &SlotRange {
    type Item = TimeSlot;
    type IntoIter = SlotIter;

    fn into_iter(self) -> SlotIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct SlotIter {
    next: u8,
    end: u8,
}

impl Iterator for SlotIter {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.next >= self.end {
            return None;
        }
        let slot = TimeSlot::from_half_hours(self.next);
        self.next += 1;
        slot
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.end.saturating_sub(self.next));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SlotIter {
    fn next_back(&mut self) -> Option<TimeSlot> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        TimeSlot::from_half_hours(self.end)
    }
}

impl ExactSizeIterator for SlotIter {}

/// Slots offered on `date` under the standard weekly schedule.
pub fn generate_slots(date: NaiveDate) -> SlotRange {
    generate_slots_for(&WeeklySchedule::default(), date)
}

/// Slots offered on `date` under `schedule`.
pub fn generate_slots_for(schedule: &WeeklySchedule, date: NaiveDate) -> SlotRange {
    schedule.rule_for_date(date).slots()
}

/// Parses a `YYYY-MM-DD` date as submitted by a date input.
///
/// Anything that is not a real calendar date is rejected rather than being
/// classified as some default day.
pub fn parse_date(input: &str) -> BookingResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BookingError::InvalidDateInput("Date required".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        BookingError::InvalidDateInput(format!("Invalid date format: {trimmed:?} ({e})"))
    })
}
