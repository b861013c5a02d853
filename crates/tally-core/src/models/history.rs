//! Absence history records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// One missed (or attended) class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceEvent {
    pub date: Date,
    pub weekday: Weekday,
    pub slot: TimeSlot,
    /// Canonical subject name
    pub subject: String,
    pub is_absent: bool,
}

/// Per-day rollup used to train the advisory day-risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: Date,
    /// True if any class that day was missed
    pub is_absent: bool,
}

/// Flat absence history rebuilt wholesale from each absence file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceHistory {
    /// Slot-level events in file order
    pub events: Vec<AbsenceEvent>,

    /// One entry per instructional date in the file
    pub daily: Vec<DailyAggregate>,
}

impl AttendanceHistory {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.daily.is_empty()
    }

    /// Number of slot-level absences.
    pub fn absence_count(&self) -> usize {
        self.events.iter().filter(|event| event.is_absent).count()
    }

    /// Number of dates with at least one absence.
    pub fn absent_days(&self) -> usize {
        self.daily.iter().filter(|day| day.is_absent).count()
    }

    /// First and last date covered, if any.
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let first = self.daily.iter().map(|day| day.date).min()?;
        let last = self.daily.iter().map(|day| day.date).max()?;
        Some((first, last))
    }
}
