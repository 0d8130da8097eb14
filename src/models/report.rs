//! Department report view models consumed by the GUI, CLI and Excel export.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::day::{DayClass, DayLabel, DayTally};
use crate::report::payroll::{display_amount, display_count};

/// Placeholder shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// One cell of the attendance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub class: DayClass,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
}

impl GridCell {
    pub fn clock_in_text(&self) -> String {
        format_clock(self.clock_in)
    }

    pub fn clock_out_text(&self) -> String {
        format_clock(self.clock_out)
    }

    /// Cell text: a single placeholder for empty days, otherwise both times on two lines.
    pub fn text(&self) -> String {
        if self.clock_in.is_none() && self.clock_out.is_none() {
            PLACEHOLDER.to_string()
        } else {
            format!("{}\n{}", self.clock_in_text(), self.clock_out_text())
        }
    }
}

fn format_clock(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Grid row for one person, cells in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRow {
    pub name: String,
    pub cells: Vec<GridCell>,
    pub tally: DayTally,
}

/// Payroll summary line for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub department: String,
    pub name: String,
    pub tally: DayTally,
    /// Missing days beyond paid leave (may be negative).
    pub absence_days: i64,
    pub worked_days: i64,
    pub deduction: i64,
    pub net_pay: i64,
}

impl PayrollSummary {
    pub fn absence_display(&self) -> String {
        display_count(self.absence_days)
    }

    pub fn partial_display(&self) -> String {
        display_count(self.tally.partial)
    }

    pub fn late_display(&self) -> String {
        display_count(self.tally.on_time_late)
    }

    pub fn very_late_display(&self) -> String {
        display_count(self.tally.very_late)
    }

    /// Deduction as currency, or the placeholder when nothing is owed.
    pub fn deduction_display(&self, prefix: &str) -> String {
        display_amount(self.deduction, prefix)
    }

    /// Net pay as currency, or the placeholder when not positive.
    pub fn net_pay_display(&self, prefix: &str) -> String {
        display_amount(self.net_pay, prefix)
    }
}

/// Everything a presentation surface needs for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentReport {
    pub department: String,
    /// Human-readable pay period, e.g. "21 August 2024 - 20 September 2024".
    pub period_caption: String,
    pub columns: Vec<DayLabel>,
    pub rows: Vec<PersonRow>,
    pub summaries: Vec<PayrollSummary>,
}

impl DepartmentReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
