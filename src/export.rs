//! Excel export functionality.

use crate::error::{AppError, Result};
use crate::models::{DayClass, DepartmentReport};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::{Path, PathBuf};

/// Highest zero-based column index a worksheet accepts.
const MAX_COL: u16 = 16_383;
/// Highest zero-based row index a worksheet accepts.
const MAX_ROW: u32 = 1_048_575;

/// Fill color of a grid cell, matching the on-screen legend.
pub fn class_color(class: DayClass) -> Option<u32> {
    match class {
        DayClass::NoData => Some(0xFF9999),
        DayClass::PartialData => Some(0xFFCC80),
        DayClass::OnTimeLate => Some(0xA5D6A7),
        DayClass::VeryLate => Some(0x90CAF9),
        DayClass::OnTime => None,
    }
}

/// Worksheet column for the `idx`-th item after `offset` leading columns.
fn sheet_col(idx: usize, offset: usize) -> Result<u16> {
    idx.checked_add(offset)
        .and_then(|c| u16::try_from(c).ok())
        .filter(|c| *c <= MAX_COL)
        .ok_or_else(|| AppError::validation(format!("Too many columns for a worksheet ({})", idx.saturating_add(offset).saturating_add(1))))
}

/// Worksheet row for the `idx`-th record below the header row.
fn sheet_row(idx: usize) -> Result<u32> {
    idx.checked_add(1)
        .and_then(|r| u32::try_from(r).ok())
        .filter(|r| *r <= MAX_ROW)
        .ok_or_else(|| AppError::validation(format!("Too many rows for a worksheet ({})", idx.saturating_add(2))))
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Export a department report to an Excel file.
///
/// Sheet "Attendance" holds the colored grid, sheet "Payroll" the summary table.
/// Fails before writing anything when the report does not fit a worksheet.
pub fn export_department_report(report: &DepartmentReport, currency_prefix: &str, path: &Path) -> Result<()> {
    sheet_col(report.columns.len(), 0)?;
    sheet_row(report.rows.len().max(report.summaries.len()).saturating_sub(1))?;

    let mut workbook = Workbook::new();
    let header_format = header_format();

    // Attendance grid
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance")?;

    worksheet.write_string_with_format(0, 0, "Name", &header_format)?;
    worksheet.set_column_width(0, 30)?;
    for (idx, label) in report.columns.iter().enumerate() {
        let col = sheet_col(idx, 1)?;
        worksheet.write_string_with_format(0, col, label.to_string(), &header_format)?;
        worksheet.set_column_width(col, 8)?;
    }

    for (idx, person) in report.rows.iter().enumerate() {
        let row = sheet_row(idx)?;
        worksheet.write_string(row, 0, &person.name)?;

        for (col_idx, cell) in person.cells.iter().enumerate() {
            let mut format = Format::new()
                .set_text_wrap()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin);
            if let Some(rgb) = class_color(cell.class) {
                format = format.set_background_color(Color::RGB(rgb));
            }
            worksheet.write_string_with_format(row, sheet_col(col_idx, 1)?, cell.text(), &format)?;
        }
    }

    worksheet.set_freeze_panes(1, 1)?;

    // Payroll summary
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Payroll")?;

    let headers = [
        "Department",
        "Name",
        "Missing",
        "Partial",
        "Late",
        "Very Late",
        "Days Worked",
        "Deduction",
        "Net Pay",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, sheet_col(col, 0)?, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 20)?; // Department
    worksheet.set_column_width(1, 30)?; // Name
    for col in 2..=6 {
        worksheet.set_column_width(col, 11)?;
    }
    worksheet.set_column_width(7, 16)?; // Deduction
    worksheet.set_column_width(8, 16)?; // Net Pay

    for (idx, summary) in report.summaries.iter().enumerate() {
        let row = sheet_row(idx)?;

        worksheet.write_string(row, 0, &summary.department)?;
        worksheet.write_string(row, 1, &summary.name)?;
        worksheet.write_string(row, 2, summary.absence_display())?;
        worksheet.write_string(row, 3, summary.partial_display())?;
        worksheet.write_string(row, 4, summary.late_display())?;
        worksheet.write_string(row, 5, summary.very_late_display())?;
        worksheet.write_number(row, 6, summary.worked_days as f64)?;
        worksheet.write_string(row, 7, summary.deduction_display(currency_prefix))?;
        worksheet.write_string(row, 8, summary.net_pay_display(currency_prefix))?;
    }

    // Autofilter
    if !report.summaries.is_empty() {
        let last_row = sheet_row(report.summaries.len() - 1)?;
        worksheet.autofilter(0, 0, last_row, 8)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Open file dialog for a scanner export.
pub fn show_open_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Attendance Export", &["csv", "txt"])
        .pick_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    let prefix: String = prefix
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}
