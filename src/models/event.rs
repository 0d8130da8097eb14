//! Export rows and normalized attendance events.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::StatusVocabulary;

/// One tokenized line of the scanner export, fields already un-quoted and trimmed.
///
/// Column order: Department; Name; ID; DateTime; Status; CorrectedStatus; ApprovalFlag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub department: String,
    pub name: String,
    pub employee_id: String,
    pub datetime: String,
    pub status: String,
    pub corrected_status: String,
    pub approval: String,
}

impl RawRow {
    /// Build a row from positional fields. Missing trailing fields are empty.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = fields.into_iter().map(Into::into);
        let mut next = || it.next().unwrap_or_default();
        Self {
            department: next(),
            name: next(),
            employee_id: next(),
            datetime: next(),
            status: next(),
            corrected_status: next(),
            approval: next(),
        }
    }

    /// True for rows produced by empty lines.
    pub fn is_blank(&self) -> bool {
        [
            &self.department,
            &self.name,
            &self.employee_id,
            &self.datetime,
            &self.status,
            &self.corrected_status,
            &self.approval,
        ]
        .iter()
        .all(|f| f.is_empty())
    }
}

/// Punch status decided once during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchStatus {
    ClockIn,
    ClockOut,
    Other(String),
}

impl PunchStatus {
    /// Map a raw status literal using the configured vocabulary (exact match).
    pub fn from_raw(raw: &str, vocabulary: &StatusVocabulary) -> Self {
        if raw == vocabulary.clock_in {
            Self::ClockIn
        } else if raw == vocabulary.clock_out {
            Self::ClockOut
        } else {
            Self::Other(raw.to_string())
        }
    }
}

/// A single normalized scanner event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub department: String,
    pub name: String,
    pub employee_id: String,
    pub date: NaiveDate,
    /// Time of day, minute precision.
    pub time: NaiveTime,
    pub status: PunchStatus,
    pub corrected_status: Option<PunchStatus>,
    /// Whether the approval flag carried the "approved" literal.
    pub approved: bool,
}
