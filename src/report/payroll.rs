//! Meal-allowance deduction and net pay.

use crate::config::PayrollConfig;
use crate::models::{DayTally, PayrollSummary, report::PLACEHOLDER};

impl PayrollSummary {
    /// Compute the payroll summary for one person.
    ///
    /// ```text
    /// deduction = late_fee * late + allowance * (partial + very_late + missing - paid_leave)
    /// net_pay   = (total_workdays - paid_leave) * allowance - deduction
    /// ```
    pub fn compute(department: &str, name: &str, tally: DayTally, payroll: &PayrollConfig) -> Self {
        let allowance = payroll.meal_allowance_for(department);
        let absence_days = tally.missing - payroll.paid_leave_days;

        let deduction = payroll.late_flat_fee * tally.on_time_late
            + allowance * (tally.partial + tally.very_late + tally.missing - payroll.paid_leave_days);
        let net_pay = (payroll.total_workdays - payroll.paid_leave_days) * allowance - deduction;

        Self {
            department: department.to_string(),
            name: name.to_string(),
            tally,
            absence_days,
            worked_days: payroll.total_workdays - tally.missing,
            deduction,
            net_pay,
        }
    }
}

/// Format an amount with `.` thousands separators, e.g. `Rp. 1.250.000`.
pub fn format_currency(amount: i64, prefix: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{prefix}{sign}{grouped}")
}

/// Currency text for positive amounts, placeholder otherwise.
pub fn display_amount(amount: i64, prefix: &str) -> String {
    if amount > 0 {
        format_currency(amount, prefix)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Count text, placeholder for zero.
pub fn display_count(count: i64) -> String {
    if count == 0 {
        PLACEHOLDER.to_string()
    } else {
        count.to_string()
    }
}
