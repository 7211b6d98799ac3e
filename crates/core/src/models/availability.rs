use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BookingError, BookingResult},
    models::time_slot::{HALF_HOURS_PER_DAY, TimeSlot},
    slots::SlotRange,
};

/// Which availability bucket a calendar date falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    Weekday,
    Weekend,
}

impl DayClass {
    pub fn of(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => DayClass::Weekend,
            _ => DayClass::Weekday,
        }
    }

    /// Classifies a weekday index where Sunday is `0` and Saturday is `6`.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 | 6 => Some(DayClass::Weekend),
            1..=5 => Some(DayClass::Weekday),
            _ => None,
        }
    }
}

/// A half-open interval `[start, end)` of bookable time on a single day,
/// kept as half-hour counts from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRule {
    start: u8,
    end: u8,
}

impl AvailabilityRule {
    pub const WEEKDAY: AvailabilityRule = AvailabilityRule { start: 35, end: 44 };
    pub const WEEKEND: AvailabilityRule = AvailabilityRule { start: 16, end: 44 };

    /// Builds a rule from fractional hours (`17.5` is 17:30).
    ///
    /// Both bounds must be multiples of half an hour within the day and the
    /// end must come after the start.
    pub fn new(start_hour: f64, end_hour: f64) -> BookingResult<Self> {
        let start = half_hours_from_fractional(start_hour)?;
        let end = half_hours_from_fractional(end_hour)?;
        if end <= start {
            return Err(BookingError::Validation(
                "End time must be after start time.".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start_hour(&self) -> f64 {
        f64::from(self.start) / 2.0
    }

    pub fn end_hour(&self) -> f64 {
        f64::from(self.end) / 2.0
    }

    pub fn slots(&self) -> SlotRange {
        SlotRange::new(self.start, self.end)
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        (self.start..self.end).contains(&slot.half_hours())
    }
}

fn half_hours_from_fractional(hour: f64) -> BookingResult<u8> {
    let doubled = hour * 2.0;
    if !doubled.is_finite()
        || doubled.fract() != 0.0
        || doubled < 0.0
        || doubled > f64::from(HALF_HOURS_PER_DAY)
    {
        return Err(BookingError::Validation(format!(
            "Hour {hour} is not a half-hour boundary within the day"
        )));
    }
    Ok(doubled as u8)
}

/// The weekly availability table: one rule for weekdays, one for weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub weekday: AvailabilityRule,
    pub weekend: AvailabilityRule,
}

impl Default for WeeklySchedule {
    /// Weekdays 5:30 PM - 10:00 PM, weekends 8:00 AM - 10:00 PM.
    fn default() -> Self {
        Self {
            weekday: AvailabilityRule::WEEKDAY,
            weekend: AvailabilityRule::WEEKEND,
        }
    }
}

impl WeeklySchedule {
    pub fn new(weekday: AvailabilityRule, weekend: AvailabilityRule) -> Self {
        Self { weekday, weekend }
    }

    pub fn rule_for(&self, class: DayClass) -> AvailabilityRule {
        match class {
            DayClass::Weekday => self.weekday,
            DayClass::Weekend => self.weekend,
        }
    }

    pub fn rule_for_date(&self, date: NaiveDate) -> AvailabilityRule {
        self.rule_for(DayClass::of(date))
    }

    /// One summary entry per day of the week, Monday first.
    pub fn days(&self) -> Vec<DayAvailability> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(|weekday| {
            let class = DayClass::from_weekday(weekday);
            DayAvailability::new(weekday, class, self.rule_for(class))
        })
        .collect()
    }
}

/// Serializable summary of the rule applied on one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: String,
    pub classification: DayClass,
    pub start_hour: f64,
    pub end_hour: f64,
    pub first_slot: Option<TimeSlot>,
    pub last_slot: Option<TimeSlot>,
    pub slot_count: usize,
}

impl DayAvailability {
    fn new(weekday: Weekday, classification: DayClass, rule: AvailabilityRule) -> Self {
        let slots = rule.slots();
        Self {
            day: day_name(weekday).to_string(),
            classification,
            start_hour: rule.start_hour(),
            end_hour: rule.end_hour(),
            first_slot: slots.first(),
            last_slot: slots.last(),
            slot_count: slots.len(),
        }
    }
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
