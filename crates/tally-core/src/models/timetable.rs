//! Weekly-recurring timetable model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// Classes of a single weekday keyed by start time.
pub type DaySchedule = BTreeMap<TimeSlot, String>;

/// Mapping from weekday to the classes held on it.
///
/// Only weekdays with at least one class are present, and each
/// `(weekday, slot)` pair holds exactly one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    days: BTreeMap<Weekday, DaySchedule>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a class, replacing whatever was held in that slot before.
    pub fn insert(&mut self, day: Weekday, slot: TimeSlot, subject: impl Into<String>) {
        self.days.entry(day).or_default().insert(slot, subject.into());
    }

    /// Classes held on `day`, if any.
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    /// Subject held at `(day, slot)`.
    pub fn subject_at(&self, day: Weekday, slot: TimeSlot) -> Option<&str> {
        self.day(day)?.get(&slot).map(String::as_str)
    }

    /// Whether a class is held at `(day, slot)`.
    pub fn contains(&self, day: Weekday, slot: TimeSlot) -> bool {
        self.subject_at(day, slot).is_some()
    }

    /// Iterates the weekdays with classes, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        self.days.iter().map(|(day, classes)| (*day, classes))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of classes per week.
    pub fn class_count(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }
}
