//! Per-day attendance classification and per-person tallies.

use crate::config::ThresholdConfig;
use crate::models::{DayClass, DayLabel, DayRecord, DayTally, GridCell, PersonRow};

use super::aggregate::{AttendanceSheet, PersonAttendance};

/// Classify one day.
///
/// Late starts at `late_from` and very late at `very_late_from`, both inclusive.
pub fn classify_day(record: &DayRecord, thresholds: &ThresholdConfig) -> DayClass {
    match (record.clock_in, record.clock_out) {
        (None, None) => DayClass::NoData,
        (None, Some(_)) | (Some(_), None) => DayClass::PartialData,
        (Some(clock_in), Some(_)) if clock_in >= thresholds.very_late_from => DayClass::VeryLate,
        (Some(clock_in), Some(_)) if clock_in >= thresholds.late_from => DayClass::OnTimeLate,
        (Some(_), Some(_)) => DayClass::OnTime,
    }
}

/// Build a grid row for one person over the given columns.
pub fn classify_person(person: &PersonAttendance, columns: &[DayLabel], thresholds: &ThresholdConfig) -> PersonRow {
    let mut tally = DayTally::default();

    let cells: Vec<GridCell> = columns
        .iter()
        .map(|label| {
            let record = person.day(*label);
            let class = classify_day(&record, thresholds);
            tally.record(class);
            GridCell {
                class,
                clock_in: record.clock_in,
                clock_out: record.clock_out,
            }
        })
        .collect();

    PersonRow {
        name: person.name.clone(),
        cells,
        tally,
    }
}

/// Grid rows for every person of the sheet, in sheet order.
pub fn classify_sheet(sheet: &AttendanceSheet, columns: &[DayLabel], thresholds: &ThresholdConfig) -> Vec<PersonRow> {
    sheet
        .people
        .iter()
        .map(|person| classify_person(person, columns, thresholds))
        .collect()
}
