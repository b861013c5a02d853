//! Time-of-day slots normalized to `HH:MM`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `8:45`, `08:45`, `10:45-11:45` (first match wins).
static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("valid regex"));

/// Column labels such as `P8-45AM` or `P13:45PM`.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})[-:](\d{2})").expect("valid regex"));

/// A wall-clock time at which a class starts.
///
/// Ordering and equality follow the time of day, so sorting slots yields the
/// order in which classes happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Creates a slot, rejecting values that are not a valid time of day.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Finds the first `H:MM`/`HH:MM` time in free text.
    pub fn find_clock(text: &str) -> Option<Self> {
        Self::first_match(&CLOCK, text)
    }

    /// Finds the first hour-minute pair in a column label, accepting `-` or
    /// `:` as the separator.
    pub fn find_in_label(text: &str) -> Option<Self> {
        Self::first_match(&LABEL, text)
    }

    fn first_match(pattern: &Regex, text: &str) -> Option<Self> {
        let caps = pattern.captures(text)?;
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Self::find_clock(trimmed) {
            Some(slot) if CLOCK.find(trimmed).map(|m| m.as_str()) == Some(trimmed) => Ok(slot),
            _ => Err(format!("Invalid time slot: {s}")),
        }
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
