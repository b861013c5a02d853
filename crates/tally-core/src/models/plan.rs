//! Recovery plan inputs and results.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, TimeSlot, Weekday};

/// Resolved inputs of a single planning request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Target attendance percentage (0-100)
    pub target_percent: f64,

    /// Classes held so far; negative values are treated as zero
    pub total_classes: i64,

    /// Classes missed so far; negative values are treated as zero
    pub absent_classes: i64,

    /// First date the student can attend
    pub start: Date,

    /// Last date considered by the schedule simulation (inclusive)
    pub limit: Date,
}

/// A single future class the student should attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledClass {
    pub date: Date,
    pub weekday: Weekday,
    pub slot: TimeSlot,
    pub subject: String,
}

/// Concrete schedule produced by walking the timetable forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Distinct dates spanned by the schedule
    pub days_needed: usize,

    /// Date of the last scheduled class
    pub end_date: Date,

    /// Classes in attendance order
    pub schedule: Vec<ScheduledClass>,
}

/// Outcome of a planning request together with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// No number of attended classes reaches the target
    Impossible,

    /// The target is reachable. `projection` is present only when a
    /// timetable was available to schedule against.
    Deficit {
        classes_needed: i64,
        projection: Option<Projection>,
    },

    /// The timetable has no classes between start and limit
    NoClassesFound {
        classes_needed: i64,
        end_date: Date,
    },

    /// The timetable runs out before the limit date; `max_possible` is the
    /// best percentage reachable by attending every projected class.
    ImpossibleTimeframe {
        classes_needed: i64,
        max_possible: f64,
        projection: Projection,
    },

    /// The target is already met. A target of 0 yields
    /// [`PlanResult::UNBOUNDED_SKIPS`].
    Surplus { classes_skippable: i64 },
}

impl PlanOutcome {
    pub fn status(&self) -> PlanStatus {
        match self {
            PlanOutcome::Impossible => PlanStatus::Impossible,
            PlanOutcome::Deficit { .. } => PlanStatus::Deficit,
            PlanOutcome::NoClassesFound { .. } => PlanStatus::NoClassesFound,
            PlanOutcome::ImpossibleTimeframe { .. } => PlanStatus::ImpossibleTimeframe,
            PlanOutcome::Surplus { .. } => PlanStatus::Surplus,
        }
    }
}

/// Result of a planning request, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Attendance percentage before any planned classes (0 when nothing
    /// has been held yet)
    pub current_pct: f64,

    pub target_percent: f64,

    /// Clamped class counts the plan was computed from
    pub total_classes: i64,
    pub absent_classes: i64,

    #[serde(flatten)]
    pub outcome: PlanOutcome,
}

impl PlanResult {
    /// Skippable count reported when the target is 0%.
    pub const UNBOUNDED_SKIPS: i64 = 9999;

    pub fn status(&self) -> PlanStatus {
        self.outcome.status()
    }

    /// Classes that must still be attended, if the outcome carries one.
    pub fn classes_needed(&self) -> Option<i64> {
        match &self.outcome {
            PlanOutcome::Deficit { classes_needed, .. }
            | PlanOutcome::NoClassesFound { classes_needed, .. }
            | PlanOutcome::ImpossibleTimeframe { classes_needed, .. } => Some(*classes_needed),
            PlanOutcome::Impossible | PlanOutcome::Surplus { .. } => None,
        }
    }

    /// Projected schedule, empty when none was produced.
    pub fn schedule(&self) -> &[ScheduledClass] {
        match &self.outcome {
            PlanOutcome::Deficit {
                projection: Some(projection),
                ..
            }
            | PlanOutcome::ImpossibleTimeframe { projection, .. } => &projection.schedule,
            _ => &[],
        }
    }
}
