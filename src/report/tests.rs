//! End-to-end scenarios: export text through to the payroll table.

use super::*;
use crate::import::parse_export;
use crate::models::DayClass;

const HEADER: &str = "Departemen;Nama;No. ID;Tgl/Waktu;Status;Status Baru;Pengecualian";

fn run(lines: &[&str], department: &str) -> DepartmentReport {
    let text = format!("{HEADER}\n{}\n", lines.join("\n"));
    let config = AppConfig::default();
    let rows = parse_export(&text);
    let batch = normalize_rows(&rows, &config.vocabulary);
    build_department_report(&batch.events, department, &config)
}

fn column(report: &DepartmentReport, label: &str) -> usize {
    report
        .columns
        .iter()
        .position(|c| c.to_string() == label)
        .unwrap()
}

#[test]
fn test_on_time_day_end_to_end() {
    let report = run(
        &[
            "OPS;A;1;21-08-2024 08:10;C/Masuk;;OK",
            "OPS;A;1;21-08-2024 17:00;C/Keluar;;OK",
        ],
        "OPS",
    );

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    let cell = row.cells[column(&report, "21-08")];

    assert_eq!(cell.class, DayClass::OnTime);
    assert_eq!(cell.clock_in_text(), "08:10");
    assert_eq!(cell.clock_out_text(), "17:00");

    // The other 30 days are missing; nothing else is tallied
    assert_eq!(row.tally.missing, 30);
    assert_eq!(row.tally.partial, 0);
    assert_eq!(row.tally.on_time_late, 0);
    assert_eq!(row.tally.very_late, 0);
    assert_eq!(row.tally.on_time, 1);
}

#[test]
fn test_partial_day_counts_as_partial() {
    let report = run(&["OPS;A;1;22-08-2024 17:00;C/Keluar;;OK"], "OPS");

    let row = &report.rows[0];
    assert_eq!(row.cells[column(&report, "22-08")].class, DayClass::PartialData);
    assert_eq!(row.tally.partial, 1);
    assert_eq!(row.tally.missing, 30);
}

#[test]
fn test_corrected_status_closes_day() {
    let report = run(
        &[
            "OPS;A;1;23-08-2024 08:00;C/Masuk;;OK",
            "OPS;A;1;23-08-2024 17:15;C/Masuk;C/Keluar;OK",
        ],
        "OPS",
    );

    let cell = report.rows[0].cells[column(&report, "23-08")];
    assert_eq!(cell.clock_in_text(), "08:00");
    assert_eq!(cell.clock_out_text(), "17:15");
    assert_eq!(cell.class, DayClass::OnTime);
}

#[test]
fn test_unapproved_events_are_ignored() {
    let report = run(
        &[
            "OPS;A;1;21-08-2024 08:00;C/Masuk;;Tidak",
            "OPS;A;1;21-08-2024 17:00;C/Keluar;;",
        ],
        "OPS",
    );

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].cells[column(&report, "21-08")].class, DayClass::NoData);
    assert_eq!(report.rows[0].tally.missing, 31);
}

#[test]
fn test_late_clock_in_after_cutoff_is_dropped() {
    let report = run(
        &[
            "OPS;A;1;24-08-2024 12:00;C/Masuk;;OK",
            "OPS;A;1;24-08-2024 17:00;C/Keluar;;OK",
        ],
        "OPS",
    );

    let cell = report.rows[0].cells[column(&report, "24-08")];
    assert_eq!(cell.clock_in, None);
    assert_eq!(cell.class, DayClass::PartialData);
}

#[test]
fn test_malformed_rows_do_not_abort() {
    let report = run(
        &[
            "OPS;A;1;;C/Masuk;;OK",
            "OPS;A;1;21-08-2024 08:20;;;OK",
            "OPS;A;1;21-08-2024 08:20;C/Masuk;;OK",
            "OPS;A;1;21-08-2024 17:00;C/Keluar;;OK",
        ],
        "OPS",
    );

    let row = &report.rows[0];
    assert_eq!(row.cells[column(&report, "21-08")].class, DayClass::OnTimeLate);
    assert_eq!(row.tally.on_time_late, 1);
}

#[test]
fn test_payroll_row_for_department() {
    let report = run(
        &[
            "ADMIN;B;2;21-08-2024 08:40;C/Masuk;;OK",
            "ADMIN;B;2;21-08-2024 17:00;C/Keluar;;OK",
            "OPS;A;1;21-08-2024 08:00;C/Masuk;;OK",
        ],
        "ADMIN",
    );

    assert_eq!(report.summaries.len(), 1);
    let summary = &report.summaries[0];
    assert_eq!(summary.department, "ADMIN");
    assert_eq!(summary.name, "B");
    assert_eq!(summary.tally.very_late, 1);
    assert_eq!(summary.absence_days, 25);
    assert_eq!(summary.worked_days, 1);
    // 20000 * (0 + 1 + 30 - 5)
    assert_eq!(summary.deduction, 520000);
    assert_eq!(summary.deduction_display("Rp. "), "Rp. 520.000");
    assert_eq!(summary.net_pay, 0);
    assert_eq!(summary.net_pay_display("Rp. "), "-");
}

#[test]
fn test_unknown_department_is_empty() {
    let report = run(&["OPS;A;1;21-08-2024 08:00;C/Masuk;;OK"], "GUDANG");
    assert!(report.is_empty());
    assert!(report.summaries.is_empty());
    assert_eq!(report.columns.len(), 31);
}

#[test]
fn test_empty_file_produces_empty_report() {
    let config = AppConfig::default();
    let batch = normalize_rows(&parse_export(""), &config.vocabulary);
    let report = build_department_report(&batch.events, "OPS", &config);

    assert!(batch.events.is_empty());
    assert!(report.is_empty());
    assert_eq!(report.period_caption, "21 August 2024 - 20 September 2024");
}
