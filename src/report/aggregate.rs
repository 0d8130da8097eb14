//! Fold attendance events into one clock-in/clock-out pair per person per day.

use std::collections::HashMap;

use chrono::NaiveTime;
use tracing::debug;

use crate::config::ThresholdConfig;
use crate::models::{AttendanceEvent, DayLabel, DayRecord, PunchStatus};

/// Day records of one person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonAttendance {
    pub name: String,
    pub days: HashMap<DayLabel, DayRecord>,
}

impl PersonAttendance {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            days: HashMap::new(),
        }
    }

    /// Record for a day, empty when nothing was punched.
    pub fn day(&self, label: DayLabel) -> DayRecord {
        self.days.get(&label).copied().unwrap_or_default()
    }
}

/// Aggregated attendance of one department. People keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceSheet {
    pub department: String,
    pub people: Vec<PersonAttendance>,
}

impl AttendanceSheet {
    #[cfg(test)]
    pub fn person(&self, name: &str) -> Option<&PersonAttendance> {
        self.people.iter().find(|p| p.name == name)
    }
}

/// Aggregate the events of one department.
///
/// The department match is exact and case-sensitive. Any matching event
/// registers its person, but only approved events touch the day records.
pub fn aggregate(events: &[AttendanceEvent], department: &str, thresholds: &ThresholdConfig) -> AttendanceSheet {
    let mut people: Vec<PersonAttendance> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events.iter().filter(|e| e.department == department) {
        let idx = *index.entry(event.name.as_str()).or_insert_with(|| {
            people.push(PersonAttendance::new(&event.name));
            people.len() - 1
        });

        let record = people[idx].days.entry(DayLabel::from(event.date)).or_default();
        apply_event(record, event, thresholds.clock_in_cutoff);
    }

    debug!("Aggregated {} people for department '{department}'", people.len());

    AttendanceSheet {
        department: department.to_string(),
        people,
    }
}

/// Apply one event to its day record; later events overwrite earlier ones.
fn apply_event(record: &mut DayRecord, event: &AttendanceEvent, cutoff: NaiveTime) {
    if !event.approved {
        return;
    }

    match event.status {
        PunchStatus::ClockIn => {
            // Clock-ins after the cutoff are not morning entries
            if event.time <= cutoff {
                record.clock_in = Some(event.time);
            }
        }
        PunchStatus::ClockOut => record.clock_out = Some(event.time),
        PunchStatus::Other(_) => {}
    }

    // A clock-in amended to clock-out also closes the day
    if event.status == PunchStatus::ClockIn && event.corrected_status == Some(PunchStatus::ClockOut) {
        record.clock_out = Some(event.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(name: &str, day: u32, hh: u32, mm: u32, status: PunchStatus) -> AttendanceEvent {
        AttendanceEvent {
            department: "OPS".to_string(),
            name: name.to_string(),
            employee_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, day).unwrap(),
            time: NaiveTime::from_hms_opt(hh, mm, 0).unwrap(),
            status,
            corrected_status: None,
            approved: true,
        }
    }

    fn label(day: u32) -> DayLabel {
        DayLabel { day, month: 8 }
    }

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_clock_in_and_out() {
        let events = vec![
            event("A", 21, 8, 10, PunchStatus::ClockIn),
            event("A", 21, 17, 0, PunchStatus::ClockOut),
        ];
        let sheet = aggregate(&events, "OPS", &ThresholdConfig::default());

        let rec = sheet.person("A").unwrap().day(label(21));
        assert_eq!(rec.clock_in, hm(8, 10));
        assert_eq!(rec.clock_out, hm(17, 0));
    }

    #[test]
    fn test_clock_in_cutoff_inclusive() {
        let events = vec![
            event("A", 21, 11, 59, PunchStatus::ClockIn),
            event("A", 22, 12, 0, PunchStatus::ClockIn),
        ];
        let sheet = aggregate(&events, "OPS", &ThresholdConfig::default());
        let person = sheet.person("A").unwrap();

        assert_eq!(person.day(label(21)).clock_in, hm(11, 59));
        assert_eq!(person.day(label(22)).clock_in, None);
    }

    #[test]
    fn test_corrected_clock_in_sets_clock_out() {
        let mut amended = event("A", 21, 17, 5, PunchStatus::ClockIn);
        amended.corrected_status = Some(PunchStatus::ClockOut);

        let sheet = aggregate(&[amended], "OPS", &ThresholdConfig::default());
        let rec = sheet.person("A").unwrap().day(label(21));

        // 17:05 is past the cutoff so only the clock-out is recorded
        assert_eq!(rec.clock_in, None);
        assert_eq!(rec.clock_out, hm(17, 5));
    }

    #[test]
    fn test_corrected_morning_clock_in_sets_both() {
        let mut amended = event("A", 21, 9, 0, PunchStatus::ClockIn);
        amended.corrected_status = Some(PunchStatus::ClockOut);

        let sheet = aggregate(&[amended], "OPS", &ThresholdConfig::default());
        let rec = sheet.person("A").unwrap().day(label(21));
        assert_eq!(rec.clock_in, hm(9, 0));
        assert_eq!(rec.clock_out, hm(9, 0));
    }

    #[test]
    fn test_unapproved_event_registers_person_only() {
        let mut pending = event("B", 21, 8, 0, PunchStatus::ClockIn);
        pending.approved = false;

        let sheet = aggregate(&[pending], "OPS", &ThresholdConfig::default());
        let person = sheet.person("B").unwrap();
        assert_eq!(person.day(label(21)), DayRecord::default());
    }

    #[test]
    fn test_last_write_wins() {
        let events = vec![
            event("A", 21, 8, 0, PunchStatus::ClockIn),
            event("A", 21, 8, 20, PunchStatus::ClockIn),
            event("A", 21, 16, 0, PunchStatus::ClockOut),
            event("A", 21, 17, 0, PunchStatus::ClockOut),
        ];
        let sheet = aggregate(&events, "OPS", &ThresholdConfig::default());
        let rec = sheet.person("A").unwrap().day(label(21));
        assert_eq!(rec.clock_in, hm(8, 20));
        assert_eq!(rec.clock_out, hm(17, 0));
    }

    #[test]
    fn test_other_status_ignored() {
        let events = vec![event("A", 21, 8, 0, PunchStatus::Other("Lembur".to_string()))];
        let sheet = aggregate(&events, "OPS", &ThresholdConfig::default());
        assert_eq!(sheet.person("A").unwrap().day(label(21)), DayRecord::default());
    }

    #[test]
    fn test_department_filter_is_exact() {
        let mut lower = event("C", 21, 8, 0, PunchStatus::ClockIn);
        lower.department = "ops".to_string();
        let mut padded = event("D", 21, 8, 0, PunchStatus::ClockIn);
        padded.department = "OPS ".to_string();

        let sheet = aggregate(&[lower, padded], "OPS", &ThresholdConfig::default());
        assert!(sheet.people.is_empty());
    }

    #[test]
    fn test_people_keep_first_seen_order() {
        let events = vec![
            event("Zed", 21, 8, 0, PunchStatus::ClockIn),
            event("Amy", 21, 8, 0, PunchStatus::ClockIn),
            event("Zed", 22, 8, 0, PunchStatus::ClockIn),
        ];
        let sheet = aggregate(&events, "OPS", &ThresholdConfig::default());
        let names: Vec<&str> = sheet.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_empty_events() {
        let sheet = aggregate(&[], "OPS", &ThresholdConfig::default());
        assert_eq!(sheet.department, "OPS");
        assert!(sheet.people.is_empty());
    }
}
