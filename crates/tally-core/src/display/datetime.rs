//! Date display utilities.
//!
//! Schedules show compact day-month dates, while headlines spell the month
//! out. Both are thin wrappers implementing `Display`.

use std::fmt;

use jiff::civil::Date;

/// Formats a date as `DD-MM`, e.g. `05-01`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d-%m"))
    }
}

/// Formats a date as `DD Mon YYYY`, e.g. `05 Jan 2026`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d %b %Y"))
    }
}
