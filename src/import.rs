//! Scanner export (semicolon-delimited text) reader.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::RawRow;

/// Field separator used by the export.
const DELIMITER: char = ';';

/// Split export text into raw rows.
///
/// The first line is a header and is dropped. Quote characters are stripped
/// and every field is trimmed; no other CSV escaping is recognized.
pub fn parse_export(text: &str) -> Vec<RawRow> {
    text.split('\n')
        .skip(1)
        .map(|line| RawRow::from_fields(line.split(DELIMITER).map(clean_field)))
        .collect()
}

fn clean_field(field: &str) -> String {
    field.replace('"', "").trim().to_string()
}

/// Read and tokenize an export file.
pub fn read_export(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let rows = parse_export(&text);

    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Distinct non-empty department names, sorted.
pub fn list_departments(rows: &[RawRow]) -> Vec<String> {
    let departments: BTreeSet<String> = rows
        .iter()
        .map(|row| row.department.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Found {} departments", departments.len());
    departments.into_iter().collect()
}

/// Department to report: the requested one, or the first listed.
///
/// A requested name must match a listed department exactly.
pub fn resolve_department(departments: &[String], requested: Option<&str>) -> Result<String> {
    match requested {
        Some(name) if departments.iter().any(|d| d == name) => Ok(name.to_string()),
        Some(name) => Err(AppError::validation(format!(
            "Department '{name}' not present in export (available: {})",
            departments.join(", ")
        ))),
        None => departments
            .first()
            .cloned()
            .ok_or_else(|| AppError::not_found("no departments in export")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Departemen;Nama;No. ID;Tgl/Waktu;Status;Status Baru;Pengecualian\n\
\"OPS\";\"Andi\";\"12\";\"21-08-2024 08:10\";\"C/Masuk\";\"\";\"OK\"\r\n\
OPS;Andi;12;21-08-2024 17:00;C/Keluar;;OK\n";

    #[test]
    fn test_parse_drops_header() {
        let rows = parse_export(SAMPLE);
        // Two data lines plus the empty trailing line
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].department, "OPS");
    }

    #[test]
    fn test_parse_strips_quotes_and_whitespace() {
        let rows = parse_export(SAMPLE);
        assert_eq!(rows[0].name, "Andi");
        assert_eq!(rows[0].datetime, "21-08-2024 08:10");
        assert_eq!(rows[0].corrected_status, "");
        // Carriage return trimmed away
        assert_eq!(rows[0].approval, "OK");
    }

    #[test]
    fn test_parse_blank_line_is_empty_row() {
        let rows = parse_export(SAMPLE);
        assert_eq!(rows[2], RawRow::default());
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_export("").is_empty());
        assert!(parse_export("header only").is_empty());
    }

    #[test]
    fn test_list_departments_sorted_unique() {
        let rows = vec![
            RawRow::from_fields(["OPS"]),
            RawRow::from_fields(["ADMIN"]),
            RawRow::from_fields(["OPS"]),
            RawRow::from_fields(["   "]),
            RawRow::from_fields([""]),
            RawRow::from_fields(["GUDANG"]),
        ];
        assert_eq!(list_departments(&rows), vec!["ADMIN", "GUDANG", "OPS"]);
    }

    #[test]
    fn test_resolve_department() {
        let departments = vec!["ADMIN".to_string(), "OPS".to_string()];

        assert_eq!(resolve_department(&departments, None).unwrap(), "ADMIN");
        assert_eq!(resolve_department(&departments, Some("OPS")).unwrap(), "OPS");

        let err = resolve_department(&departments, Some("ops")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("ADMIN, OPS"));

        assert!(matches!(resolve_department(&[], None), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_read_export_file() {
        let path = std::env::temp_dir().join("attendance-recap-import-test.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let rows = read_export(&path).unwrap();
        assert_eq!(rows.len(), 3);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_export_missing_file() {
        let path = std::env::temp_dir().join("attendance-recap-does-not-exist.csv");
        assert!(read_export(&path).is_err());
    }
}
