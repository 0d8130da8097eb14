//! Raw export rows to attendance events.

use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::{info, warn};

use crate::config::StatusVocabulary;
use crate::error::RowSkip;
use crate::models::{AttendanceEvent, PunchStatus, RawRow};

/// A row left out of the batch, with its 1-based line number in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowSkip,
}

/// Result of normalizing a whole file.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub events: Vec<AttendanceEvent>,
    pub skipped: Vec<SkippedRow>,
}

/// Convert one raw row into an event.
///
/// The datetime field is split on whitespace into a date and a time part.
/// Rows with no date or no status are skipped, as are unreadable dates and times.
pub fn normalize_row(row: &RawRow, vocabulary: &StatusVocabulary) -> Result<AttendanceEvent, RowSkip> {
    if row.datetime.is_empty() {
        return Err(RowSkip::MissingDateTime);
    }
    if row.status.is_empty() {
        return Err(RowSkip::MissingStatus);
    }

    let mut parts = row.datetime.split_whitespace();
    let date_str = parts.next().unwrap_or_default();
    let time_str = parts.next().unwrap_or_default();

    let date = parse_export_date(date_str).ok_or_else(|| RowSkip::InvalidDate(date_str.to_string()))?;
    let time = parse_clock(time_str).ok_or_else(|| RowSkip::InvalidTime(time_str.to_string()))?;

    let corrected_status =
        (!row.corrected_status.is_empty()).then(|| PunchStatus::from_raw(&row.corrected_status, vocabulary));

    Ok(AttendanceEvent {
        department: row.department.clone(),
        name: row.name.clone(),
        employee_id: row.employee_id.clone(),
        date,
        time,
        status: PunchStatus::from_raw(&row.status, vocabulary),
        corrected_status,
        approved: row.approval == vocabulary.approved,
    })
}

/// Normalize every row, collecting skips instead of failing.
///
/// Blank lines are ignored without being reported.
pub fn normalize_rows(rows: &[RawRow], vocabulary: &StatusVocabulary) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for (idx, row) in rows.iter().enumerate() {
        if row.is_blank() {
            continue;
        }

        // Header occupies line 1
        let line = idx + 2;
        match normalize_row(row, vocabulary) {
            Ok(event) => batch.events.push(event),
            Err(reason) => {
                warn!("Skipping line {line}: {reason}");
                batch.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    info!(
        "Normalized {} events, skipped {} rows",
        batch.events.len(),
        batch.skipped.len()
    );
    batch
}

/// Parse the date part: `DD-MM-YYYY` or `YYYY-MM-DD`, separated by `-`, `/` or `.`.
fn parse_export_date(input: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split(['-', '/', '.']).filter(|s| !s.is_empty()).collect();

    if parts.len() != 3 {
        return None;
    }

    let (year, month, day) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[1], parts[0])
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parse a clock time to minute precision.
fn parse_clock(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()?
        .with_second(0)
}
