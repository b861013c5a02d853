//! Tolerant parsers for timetable, absence and summary files.
//!
//! Every input arrives as a CSV file with no fixed schema. Files are first
//! read into a [`Grid`] of strings, then handed to the parser for their kind:
//!
//! - [`parse_timetable`] detects the time-slot header and weekday rows
//! - [`build_history`] turns an absence log into [`crate::models::AttendanceHistory`]
//! - [`parse_summary`] seeds clean subject names and reads the totals row
//!
//! Parsers are pure apart from the [`crate::SubjectNormalizer`] they are
//! given, so a caller can run them against a scratch copy and discard it on
//! failure.

mod absences;
mod dates;
mod grid;
mod summary;
mod timetable;

pub use absences::build_history;
pub use dates::parse_day_first;
pub use grid::Grid;
pub use summary::{parse_summary, SummaryReport};
pub use timetable::{parse_timetable, MIN_TIME_COLUMNS};
