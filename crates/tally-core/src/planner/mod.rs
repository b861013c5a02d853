//! Recovery planning: how many classes to attend, and which ones.
//!
//! The [`RecoveryPlanner`] borrows the session's calendar and timetable and
//! turns a [`PlanInput`] into a [`PlanResult`]. It performs no I/O and never
//! fails; every situation, including infeasible targets, maps to one of the
//! [`PlanOutcome`] states.
//!
//! # Outcomes
//!
//! ```text
//! target ≥ 100 and absences exist ───────────────▶ Impossible
//! current < target ──┬─ target = 100 ─────────────▶ Impossible
//!                    ├─ no timetable ─────────────▶ Deficit (no schedule)
//!                    └─ simulate ─┬─ nothing found ─▶ NoClassesFound
//!                                 ├─ too few ───────▶ ImpossibleTimeframe
//!                                 └─ enough ────────▶ Deficit (schedule)
//! current ≥ target ───────────────────────────────▶ Surplus
//! ```
//!
//! # Example
//!
//! ```rust
//! use jiff::civil::date;
//! use tally_core::{
//!     calendar::CalendarPolicy,
//!     models::{PlanInput, PlanStatus},
//!     planner::RecoveryPlanner,
//! };
//!
//! let calendar = CalendarPolicy::default();
//! let planner = RecoveryPlanner::new(&calendar);
//! let result = planner.plan(&PlanInput {
//!     target_percent: 75.0,
//!     total_classes: 40,
//!     absent_classes: 14,
//!     start: date(2026, 3, 2),
//!     limit: date(2026, 5, 31),
//! });
//!
//! assert_eq!(result.status(), PlanStatus::Deficit);
//! assert_eq!(result.classes_needed(), Some(16));
//! ```

use jiff::civil::Date;
use log::debug;

mod schedule;

#[cfg(test)]
mod tests;

use crate::{
    calendar::CalendarPolicy,
    models::{PlanInput, PlanOutcome, PlanResult, Projection, ScheduledClass, Timetable},
};

/// Pure recovery planner over a calendar and an optional timetable.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryPlanner<'a> {
    calendar: &'a CalendarPolicy,
    timetable: Option<&'a Timetable>,
}

impl<'a> RecoveryPlanner<'a> {
    /// Creates a planner without a timetable.
    pub fn new(calendar: &'a CalendarPolicy) -> Self {
        Self {
            calendar,
            timetable: None,
        }
    }

    /// Schedules against `timetable`. An empty timetable counts as none.
    #[must_use]
    pub fn with_timetable(mut self, timetable: &'a Timetable) -> Self {
        self.timetable = (!timetable.is_empty()).then_some(timetable);
        self
    }

    /// Computes the recovery plan for `input`.
    ///
    /// Negative counts are clamped to zero. The result depends only on
    /// `input` and the borrowed calendar and timetable.
    pub fn plan(&self, input: &PlanInput) -> PlanResult {
        let total = input.total_classes.max(0);
        let absent = input.absent_classes.max(0);
        let present = total - absent;
        let target = input.target_percent;
        let current_pct = if total == 0 {
            0.0
        } else {
            present as f64 / total as f64 * 100.0
        };

        let outcome = self.outcome(input, total, present, current_pct);
        debug!(
            "Plan {present}/{total} ({current_pct:.2}%) toward {target}%: {}",
            outcome.status().as_str()
        );

        PlanResult {
            current_pct,
            target_percent: target,
            total_classes: total,
            absent_classes: absent,
            outcome,
        }
    }

    fn outcome(&self, input: &PlanInput, total: i64, present: i64, current_pct: f64) -> PlanOutcome {
        let target = input.target_percent;
        let absent = total - present;
        if target >= 100.0 && absent > 0 {
            PlanOutcome::Impossible
        } else if current_pct < target {
            self.deficit(input, total, present)
        } else {
            PlanOutcome::Surplus {
                classes_skippable: classes_skippable(present, total, target),
            }
        }
    }

    fn deficit(&self, input: &PlanInput, total: i64, present: i64) -> PlanOutcome {
        let target = input.target_percent;
        if 1.0 - target / 100.0 <= 0.0 {
            return PlanOutcome::Impossible;
        }
        let classes_needed = classes_needed(present, total, target);

        if self.timetable.is_none() {
            return PlanOutcome::Deficit {
                classes_needed,
                projection: None,
            };
        }

        let wanted = usize::try_from(classes_needed).unwrap_or(usize::MAX);
        if wanted == 0 {
            return PlanOutcome::Deficit {
                classes_needed,
                projection: Some(Projection {
                    days_needed: 0,
                    end_date: input.start,
                    schedule: Vec::new(),
                }),
            };
        }

        let schedule = self.simulate(input.start, input.limit, wanted);
        let Some(projection) = project(schedule) else {
            return PlanOutcome::NoClassesFound {
                classes_needed,
                end_date: input.start,
            };
        };

        let produced = projection.schedule.len();
        if produced < wanted {
            let produced = i64::try_from(produced).unwrap_or(i64::MAX);
            let max_possible =
                present.saturating_add(produced) as f64 / total.saturating_add(produced) as f64 * 100.0;
            return PlanOutcome::ImpossibleTimeframe {
                classes_needed,
                max_possible,
                projection,
            };
        }

        PlanOutcome::Deficit {
            classes_needed,
            projection: Some(projection),
        }
    }

    /// Walks the calendar from `start` to `limit` (inclusive), collecting at
    /// most `needed` timetable classes on instructional days, in date then
    /// time order.
    pub fn simulate(&self, start: Date, limit: Date, needed: usize) -> Vec<ScheduledClass> {
        match self.timetable {
            Some(timetable) => schedule::walk(self.calendar, timetable, start, limit, needed),
            None => Vec::new(),
        }
    }
}

/// Whether attending `extra` more classes reaches `target`.
fn reaches(present: i64, total: i64, extra: i64, target: f64) -> bool {
    present.saturating_add(extra) as f64 * 100.0 >= target * total.saturating_add(extra) as f64
}

/// Minimum `n ≥ 0` with `(present + n) / (total + n) ≥ target / 100`.
///
/// Starts from the closed form and corrects by one step when floating-point
/// rounding lands next to the integer optimum. Requires `target < 100`.
#[allow(clippy::cast_possible_truncation)]
fn classes_needed(present: i64, total: i64, target: f64) -> i64 {
    let t = target / 100.0;
    let estimate = ((t * total as f64 - present as f64) / (1.0 - t)).ceil();
    let mut needed = (estimate as i64).max(0);
    if needed > 0 && reaches(present, total, needed - 1, target) {
        needed -= 1;
    } else if !reaches(present, total, needed, target) {
        needed = needed.saturating_add(1);
    }
    needed
}

/// Maximum `k` with `present / (total + k) ≥ target / 100`, or
/// [`PlanResult::UNBOUNDED_SKIPS`] for a zero target.
#[allow(clippy::cast_possible_truncation)]
fn classes_skippable(present: i64, total: i64, target: f64) -> i64 {
    if target == 0.0 {
        return PlanResult::UNBOUNDED_SKIPS;
    }
    let t = target / 100.0;
    let mut skippable = (present as f64 / t - total as f64).floor() as i64;
    let keeps_target =
        |skipped: i64| present as f64 * 100.0 >= target * total.saturating_add(skipped) as f64;
    if keeps_target(skippable.saturating_add(1)) {
        skippable = skippable.saturating_add(1);
    } else if skippable > 0 && !keeps_target(skippable) {
        skippable -= 1;
    }
    skippable
}

/// Summarises a non-empty schedule.
fn project(schedule: Vec<ScheduledClass>) -> Option<Projection> {
    let end_date = schedule.last()?.date;
    let mut days_needed = 0;
    let mut previous = None;
    for class in &schedule {
        if previous != Some(class.date) {
            days_needed += 1;
            previous = Some(class.date);
        }
    }
    Some(Projection {
        days_needed,
        end_date,
        schedule,
    })
}
