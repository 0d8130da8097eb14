//! Data models for export rows, attendance events, day records and report output.

pub mod day;
pub mod event;
pub mod report;

pub use day::{DayClass, DayLabel, DayRecord, DayTally};
pub use event::{AttendanceEvent, PunchStatus, RawRow};
pub use report::{DepartmentReport, GridCell, PayrollSummary, PersonRow};
