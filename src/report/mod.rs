//! Attendance aggregation and payroll engine.
//!
//! Data flows strictly forward: raw rows are normalized into events, events
//! are folded into per-person day records, day records are classified per
//! column of the pay period, and the tallies feed the payroll formula.
//!
//! # Example
//!
//! ```ignore
//! use attendance_recap::{config::AppConfig, import, report};
//!
//! let config = AppConfig::default();
//! let rows = import::read_export(path)?;
//! let batch = report::normalize_rows(&rows, &config.vocabulary);
//! let report = report::build_department_report(&batch.events, "OPS", &config);
//! ```

pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod payroll;
pub mod period;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::config::AppConfig;
use crate::models::{AttendanceEvent, DepartmentReport, PayrollSummary};

pub use aggregate::{AttendanceSheet, PersonAttendance, aggregate};
pub use classify::{classify_day, classify_sheet};
pub use normalize::{NormalizedBatch, SkippedRow, normalize_row, normalize_rows};
pub use payroll::{display_amount, display_count, format_currency};
pub use period::{date_range, period_caption, period_labels};

/// Run the whole pipeline for one department.
///
/// Never fails: a department without events yields an empty report.
pub fn build_department_report(events: &[AttendanceEvent], department: &str, config: &AppConfig) -> DepartmentReport {
    let columns = period_labels(config.period.start, config.period.end);
    let sheet = aggregate(events, department, &config.thresholds);
    let rows = classify_sheet(&sheet, &columns, &config.thresholds);

    let summaries = rows
        .iter()
        .map(|row| PayrollSummary::compute(department, &row.name, row.tally, &config.payroll))
        .collect();

    info!(
        "Built report for '{department}': {} people over {} days",
        rows.len(),
        columns.len()
    );

    DepartmentReport {
        department: department.to_string(),
        period_caption: period_caption(config.period.start, config.period.end, config.period.caption_language),
        columns,
        rows,
        summaries,
    }
}
