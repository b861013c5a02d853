//! Parameter structures for tally operations.
//!
//! These types are free of interface-specific derives so the CLI (or any
//! other front end) can wrap them with its own argument parsing and convert
//! via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   PlanInput     │
//! │  (clap derives) │───▶│  (PlanRequest)  │───▶│ (fully resolved)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A [`PlanRequest`] may leave counts, start date and window open; resolving
//! it against the session (summary totals, calendar, today's date) yields the
//! concrete [`PlanInput`] the planner works on.

use std::fmt;
use std::str::FromStr;

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use crate::{
    calendar::CalendarPolicy,
    error::{Result, TallyError},
    models::{PlanInput, SummaryTotals},
};

/// Target used when none is given.
pub const DEFAULT_TARGET_PERCENT: f64 = 75.0;

/// Length of the [`PlanWindow::SixMonths`] window.
pub const SIX_MONTHS_DAYS: i64 = 180;

/// How far ahead the planner may schedule classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanWindow {
    /// 180 days from the start date
    #[default]
    SixMonths,
    /// End of the semester containing the start date
    SemesterEnd,
    /// A fixed last date (inclusive)
    Until(Date),
}

impl PlanWindow {
    /// Last date of the window opened at `start`.
    pub fn resolve(&self, start: Date, calendar: &CalendarPolicy) -> Date {
        match self {
            PlanWindow::SixMonths => start
                .checked_add(SIX_MONTHS_DAYS.days())
                .unwrap_or(Date::MAX),
            PlanWindow::SemesterEnd => calendar.semester_end_date(start),
            PlanWindow::Until(limit) => *limit,
        }
    }
}

impl FromStr for PlanWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "six-months" | "6-months" | "6m" => Ok(PlanWindow::SixMonths),
            "semester-end" | "semester" => Ok(PlanWindow::SemesterEnd),
            other => other.parse().map(PlanWindow::Until).map_err(|_| {
                format!("Invalid window '{s}': expected six-months, semester-end or YYYY-MM-DD")
            }),
        }
    }
}

impl fmt::Display for PlanWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWindow::SixMonths => write!(f, "six-months"),
            PlanWindow::SemesterEnd => write!(f, "semester-end"),
            PlanWindow::Until(date) => write!(f, "{date}"),
        }
    }
}

/// Parameters for a recovery plan.
///
/// Counts left as `None` are filled from a loaded attendance summary;
/// explicit values always win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Target attendance percentage (0-100)
    pub target_percent: f64,
    /// Classes held so far
    pub total: Option<i64>,
    /// Classes missed so far
    pub absent: Option<i64>,
    /// First date to attend; today when omitted
    pub start: Option<Date>,
    #[serde(default)]
    pub window: PlanWindow,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            target_percent: DEFAULT_TARGET_PERCENT,
            total: None,
            absent: None,
            start: None,
            window: PlanWindow::default(),
        }
    }
}

impl PlanRequest {
    /// Checks the fields that do not depend on session state.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidInput` if the target lies outside 0-100.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.target_percent) {
            return Err(TallyError::invalid_input("target_percent").with_reason(format!(
                "{} is not a percentage between 0 and 100",
                self.target_percent
            )));
        }
        Ok(())
    }

    /// Resolves the request into concrete planner input.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidInput` for an invalid target and
    /// `TallyError::MissingTotals` if a count is missing and no summary
    /// totals are available. A window ending before its start is passed
    /// through; the planner then finds no classes to schedule.
    pub fn resolve(
        &self,
        totals: Option<SummaryTotals>,
        calendar: &CalendarPolicy,
        today: Date,
    ) -> Result<PlanInput> {
        self.validate()?;

        let total_classes = self
            .total
            .or(totals.map(|totals| totals.total))
            .ok_or(TallyError::MissingTotals)?;
        let absent_classes = self
            .absent
            .or(totals.map(|totals| totals.absent))
            .ok_or(TallyError::MissingTotals)?;

        let start = self.start.unwrap_or(today);
        let limit = self.window.resolve(start, calendar);

        Ok(PlanInput {
            target_percent: self.target_percent,
            total_classes,
            absent_classes,
            start,
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_window_parsing() {
        assert_eq!("six-months".parse(), Ok(PlanWindow::SixMonths));
        assert_eq!("6m".parse(), Ok(PlanWindow::SixMonths));
        assert_eq!("Semester_End".parse(), Ok(PlanWindow::SemesterEnd));
        assert_eq!(
            "2026-05-31".parse(),
            Ok(PlanWindow::Until(date(2026, 5, 31)))
        );
        assert!("next week".parse::<PlanWindow>().is_err());
    }

    #[test]
    fn test_window_resolution() {
        let calendar = CalendarPolicy::default();
        let start = date(2026, 1, 5);
        assert_eq!(
            PlanWindow::SixMonths.resolve(start, &calendar),
            date(2026, 7, 4)
        );
        assert_eq!(
            PlanWindow::SemesterEnd.resolve(start, &calendar),
            date(2026, 5, 31)
        );
        assert_eq!(
            PlanWindow::Until(date(2026, 2, 1)).resolve(start, &calendar),
            date(2026, 2, 1)
        );
    }

    #[test]
    fn test_target_must_be_a_percentage() {
        for target in [-1.0, 100.5, f64::NAN] {
            let request = PlanRequest {
                target_percent: target,
                ..PlanRequest::default()
            };
            assert!(matches!(
                request.validate(),
                Err(TallyError::InvalidInput { .. })
            ));
        }
        assert!(PlanRequest::default().validate().is_ok());
    }

    #[test]
    fn test_resolve_fills_missing_counts_from_summary() {
        let calendar = CalendarPolicy::default();
        let today = date(2026, 3, 10);
        let request = PlanRequest {
            absent: Some(4),
            ..PlanRequest::default()
        };
        let totals = SummaryTotals { total: 50, absent: 9 };

        let input = request.resolve(Some(totals), &calendar, today).unwrap();
        assert_eq!(input.total_classes, 50);
        assert_eq!(input.absent_classes, 4);
        assert_eq!(input.start, today);
        assert_eq!(input.limit, date(2026, 9, 6));
    }

    #[test]
    fn test_resolve_without_counts_or_summary() {
        let calendar = CalendarPolicy::default();
        let err = PlanRequest::default()
            .resolve(None, &calendar, date(2026, 3, 10))
            .unwrap_err();
        assert!(matches!(err, TallyError::MissingTotals));
    }

    #[test]
    fn test_resolve_keeps_window_ending_before_start() {
        let calendar = CalendarPolicy::default();
        let request = PlanRequest {
            total: Some(10),
            absent: Some(2),
            start: Some(date(2026, 3, 10)),
            window: PlanWindow::Until(date(2026, 3, 9)),
            ..PlanRequest::default()
        };
        let input = request.resolve(None, &calendar, date(2026, 1, 1)).unwrap();
        assert_eq!(input.start, date(2026, 3, 10));
        assert_eq!(input.limit, date(2026, 3, 9));
    }
}
