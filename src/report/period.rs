//! Pay period calendar: canonical column order for the grid.

use chrono::{Datelike, NaiveDate};

use crate::config::CaptionLanguage;
use crate::models::DayLabel;

const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Empty when `start` is after `end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// `DD-MM` labels for the pay period, in calendar order.
pub fn period_labels(start: NaiveDate, end: NaiveDate) -> Vec<DayLabel> {
    date_range(start, end).into_iter().map(DayLabel::from).collect()
}

/// Heading for the period, e.g. "21 August 2024 - 20 September 2024".
pub fn period_caption(start: NaiveDate, end: NaiveDate, language: CaptionLanguage) -> String {
    format!("{} - {}", caption_date(start, language), caption_date(end, language))
}

fn caption_date(date: NaiveDate, language: CaptionLanguage) -> String {
    match language {
        CaptionLanguage::English => date.format("%d %B %Y").to_string(),
        CaptionLanguage::Indonesian => format!(
            "{:02} {} {}",
            date.day(),
            INDONESIAN_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}
