//! Calendar policy: which dates have no classes, and when a semester ends.
//!
//! The policy is built once from an immutable [`CalendarConfig`] and is only
//! read afterwards. A date is non-instructional when, in order:
//!
//! 1. it is a Sunday,
//! 2. it is a Saturday whose day-of-month falls in the configured window
//!    (15–21 by default, i.e. the third Saturday of the month),
//! 3. it is one of the configured holidays.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use jiff::{civil::Date, ToSpan};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TallyError},
    models::Weekday,
};

/// Days added to the start date when it already lies past the even-semester
/// end.
const FALLBACK_SEMESTER_DAYS: i64 = 180;

/// A month and day without a year, e.g. 31 May.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: i8,
    pub day: i8,
}

impl MonthDay {
    pub const fn new(month: i8, day: i8) -> Self {
        Self { month, day }
    }

    /// Whether the pair names a real date in some year (29 Feb allowed).
    pub fn is_valid(&self) -> bool {
        Date::new(2024, self.month, self.day).is_ok()
    }

    /// This month/day in `year`. The day is clamped to the month length so
    /// that 29 Feb resolves to 28 Feb in common years; out-of-range years
    /// saturate to [`Date::MAX`].
    pub fn in_year(&self, year: i16) -> Date {
        Date::new(year, self.month, 1)
            .and_then(|first| {
                let day = self.day.min(first.days_in_month());
                Date::new(year, self.month, day)
            })
            .unwrap_or(Date::MAX)
    }
}

/// Inclusive day-of-month range whose Saturdays are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturdayWindow {
    pub first_day: i8,
    pub last_day: i8,
}

impl SaturdayWindow {
    pub fn contains(&self, day: i8) -> bool {
        (self.first_day..=self.last_day).contains(&day)
    }
}

/// Why a date has no classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "name", rename_all = "snake_case")]
pub enum OffReason {
    Sunday,
    OffSaturday,
    Holiday(String),
}

/// Configuration of the academic calendar for one year.
///
/// Deserializes from JSON such as:
///
/// ```json
/// {
///   "holidays": { "Republic Day": "2026-01-26" },
///   "off_saturdays": { "first_day": 15, "last_day": 21 },
///   "even_semester_end": { "month": 5, "day": 31 },
///   "odd_semester_end": { "month": 12, "day": 15 }
/// }
/// ```
///
/// Missing fields take their values from [`CalendarConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Holiday label → date
    pub holidays: BTreeMap<String, Date>,

    pub off_saturdays: SaturdayWindow,

    /// End of the January–June semester
    pub even_semester_end: MonthDay,

    /// End of the July–December semester
    pub odd_semester_end: MonthDay,
}

impl CalendarConfig {
    /// Checks the rule parameters; holiday dates are valid by construction.
    pub fn validate(&self) -> Result<()> {
        let window = self.off_saturdays;
        if window.first_day < 1 || window.last_day > 31 || window.first_day > window.last_day {
            return Err(TallyError::invalid_input("off_saturdays").with_reason(format!(
                "day-of-month window {}..={} must lie within 1..=31",
                window.first_day, window.last_day
            )));
        }
        for (field, anchor) in [
            ("even_semester_end", self.even_semester_end),
            ("odd_semester_end", self.odd_semester_end),
        ] {
            if !anchor.is_valid() {
                return Err(TallyError::invalid_input(field).with_reason(format!(
                    "{}/{} is not a calendar date",
                    anchor.day, anchor.month
                )));
            }
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let holidays = [
            ("Hazrat Ali Jayanti", jiff::civil::date(2026, 1, 3)),
            ("Republic Day", jiff::civil::date(2026, 1, 26)),
            ("Maha Shivaratri", jiff::civil::date(2026, 2, 15)),
            ("Holika Dahan", jiff::civil::date(2026, 3, 2)),
            ("Holi", jiff::civil::date(2026, 3, 4)),
            ("Id Ul-Fitr", jiff::civil::date(2026, 3, 21)),
            ("Ram Navami", jiff::civil::date(2026, 3, 26)),
            ("Mahavir Jayanti", jiff::civil::date(2026, 3, 31)),
            ("Good Friday", jiff::civil::date(2026, 4, 3)),
            ("Dr. B.R. Ambedkar Jayanti", jiff::civil::date(2026, 4, 14)),
            ("Buddha Purnima", jiff::civil::date(2026, 5, 1)),
            ("Bakrid/Eid-Ul-Zuha", jiff::civil::date(2026, 5, 27)),
            ("Muharram", jiff::civil::date(2026, 6, 26)),
            ("Independence Day", jiff::civil::date(2026, 8, 15)),
            ("Eid-E-Milad/Barawafat", jiff::civil::date(2026, 8, 26)),
            ("Raksha Bandhan", jiff::civil::date(2026, 8, 28)),
            ("Janmashatami", jiff::civil::date(2026, 9, 4)),
            ("Mahatma Gandhi Jayanti", jiff::civil::date(2026, 10, 2)),
            ("Dussehra (Maha Ashtami)", jiff::civil::date(2026, 10, 19)),
            ("Dussehra (Maha Navami)/Vijaydashami", jiff::civil::date(2026, 10, 20)),
            ("Deepawali", jiff::civil::date(2026, 11, 8)),
            ("Govardhan Pooja", jiff::civil::date(2026, 11, 9)),
            ("Bhai Dooj / Chitragupta Jayanti", jiff::civil::date(2026, 11, 11)),
            ("Guru Nanak Jayanti / Kartik Purnima", jiff::civil::date(2026, 11, 24)),
            ("Christmas Day", jiff::civil::date(2026, 12, 25)),
            ("Mid-semester exams day 1", jiff::civil::date(2026, 2, 14)),
            ("Mid-semester exams day 2", jiff::civil::date(2026, 2, 15)),
            ("Mid-semester exams day 3", jiff::civil::date(2026, 2, 16)),
            ("Mid-semester exams day 4", jiff::civil::date(2026, 2, 17)),
            ("Mid-semester exams day 5", jiff::civil::date(2026, 2, 18)),
            ("Mid-semester exams day 6", jiff::civil::date(2026, 2, 19)),
            ("Mid-semester exams day 7", jiff::civil::date(2026, 2, 20)),
        ];

        Self {
            holidays: holidays
                .into_iter()
                .map(|(name, date)| (name.to_string(), date))
                .collect(),
            off_saturdays: SaturdayWindow {
                first_day: 15,
                last_day: 21,
            },
            even_semester_end: MonthDay::new(5, 31),
            odd_semester_end: MonthDay::new(12, 15),
        }
    }
}

/// Immutable calendar rules consulted by the history builder and planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPolicy {
    config: CalendarConfig,
    holiday_dates: BTreeSet<Date>,
}

impl CalendarPolicy {
    /// Builds a policy from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidInput` if the configuration is invalid.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        let holiday_dates = config.holidays.values().copied().collect();
        Ok(Self {
            config,
            holiday_dates,
        })
    }

    /// Loads a JSON calendar configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` if the file cannot be read,
    /// `TallyError::Serialization` if it is not valid JSON for a
    /// [`CalendarConfig`], or `TallyError::InvalidInput` if it fails
    /// validation.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TallyError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CalendarConfig = serde_json::from_str(&raw)?;
        debug!(
            "Loaded calendar from {} with {} holidays",
            path.display(),
            config.holidays.len()
        );
        Self::new(config)
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Reason a date has no classes, or `None` for an instructional day.
    pub fn off_reason(&self, date: Date) -> Option<OffReason> {
        match Weekday::of(date) {
            Weekday::Sunday => return Some(OffReason::Sunday),
            Weekday::Saturday if self.config.off_saturdays.contains(date.day()) => {
                return Some(OffReason::OffSaturday);
            }
            _ => {}
        }
        if !self.holiday_dates.contains(&date) {
            return None;
        }
        self.config
            .holidays
            .iter()
            .find(|(_, holiday)| **holiday == date)
            .map(|(name, _)| OffReason::Holiday(name.clone()))
    }

    /// Whether no classes are held on `date`.
    pub fn is_non_instructional(&self, date: Date) -> bool {
        match Weekday::of(date) {
            Weekday::Sunday => true,
            Weekday::Saturday if self.config.off_saturdays.contains(date.day()) => true,
            _ => self.holiday_dates.contains(&date),
        }
    }

    /// Estimated last day of the semester containing `start`.
    ///
    /// January–June starts end on the even-semester anchor of the same
    /// year, or 180 days after `start` if it is already past that anchor.
    /// July–December starts end on the odd-semester anchor, or on the next
    /// year's even-semester anchor if `start` is already past it.
    pub fn semester_end_date(&self, start: Date) -> Date {
        let year = start.year();
        if (1..=6).contains(&start.month()) {
            let end = self.config.even_semester_end.in_year(year);
            if start > end {
                start
                    .checked_add(FALLBACK_SEMESTER_DAYS.days())
                    .unwrap_or(Date::MAX)
            } else {
                end
            }
        } else {
            let end = self.config.odd_semester_end.in_year(year);
            if start > end {
                self.config.even_semester_end.in_year(year.saturating_add(1))
            } else {
                end
            }
        }
    }

    /// Non-instructional dates in `[from, to]` with their reasons.
    pub fn off_days(&self, from: Date, to: Date) -> Vec<(Date, OffReason)> {
        let mut days = Vec::new();
        let mut date = from;
        while date <= to {
            if let Some(reason) = self.off_reason(date) {
                days.push((date, reason));
            }
            match date.tomorrow() {
                Ok(next) => date = next,
                Err(_) => break,
            }
        }
        days
    }
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        let config = CalendarConfig::default();
        let holiday_dates = config.holidays.values().copied().collect();
        Self {
            config,
            holiday_dates,
        }
    }
}
