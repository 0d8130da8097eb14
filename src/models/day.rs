//! Per-day attendance records and their classification.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar day without year, rendered as `DD-MM`.
///
/// Column key of the attendance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayLabel {
    pub day: u32,
    pub month: u32,
}

impl From<NaiveDate> for DayLabel {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.day, self.month)
    }
}

/// Clock-in / clock-out pair for one person on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
}

/// Attendance class of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayClass {
    /// Neither clock-in nor clock-out.
    NoData,
    /// Exactly one of clock-in / clock-out.
    PartialData,
    OnTimeLate,
    VeryLate,
    OnTime,
}

impl DayClass {
    /// Stylesheet class name; on-time cells carry none.
    pub fn css_class(&self) -> &'static str {
        match self {
            DayClass::NoData => "no-data",
            DayClass::PartialData => "partial-data",
            DayClass::OnTimeLate => "on-time-late",
            DayClass::VeryLate => "very-late",
            DayClass::OnTime => "",
        }
    }

    /// Get human-readable name for the class.
    pub fn name(&self) -> &'static str {
        match self {
            DayClass::NoData => "Missing",
            DayClass::PartialData => "Partial",
            DayClass::OnTimeLate => "Late",
            DayClass::VeryLate => "Very Late",
            DayClass::OnTime => "On Time",
        }
    }
}

/// Per-person count of days in each class. The five buckets are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTally {
    pub missing: i64,
    pub partial: i64,
    pub on_time_late: i64,
    pub very_late: i64,
    pub on_time: i64,
}

impl DayTally {
    /// Count one more day of the given class.
    pub fn record(&mut self, class: DayClass) {
        match class {
            DayClass::NoData => self.missing += 1,
            DayClass::PartialData => self.partial += 1,
            DayClass::OnTimeLate => self.on_time_late += 1,
            DayClass::VeryLate => self.very_late += 1,
            DayClass::OnTime => self.on_time += 1,
        }
    }

    /// Number of days tallied.
    #[cfg(test)]
    pub fn total(&self) -> i64 {
        self.missing + self.partial + self.on_time_late + self.very_late + self.on_time
    }
}
