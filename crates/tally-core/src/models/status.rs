//! Outcome tags for recovery plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of recovery plan outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// The target cannot be reached by attending any number of classes
    Impossible,

    /// Attendance is below target; classes must be attended
    Deficit,

    /// The timetable yields no classes between start and limit
    NoClassesFound,

    /// Not enough classes exist before the limit date
    ImpossibleTimeframe,

    /// Attendance is at or above target; some classes may be skipped
    Surplus,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "impossible" => Ok(PlanStatus::Impossible),
            "deficit" => Ok(PlanStatus::Deficit),
            "no_classes_found" | "noclassesfound" => Ok(PlanStatus::NoClassesFound),
            "impossible_timeframe" | "impossibletimeframe" => Ok(PlanStatus::ImpossibleTimeframe),
            "surplus" => Ok(PlanStatus::Surplus),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Stable string form, matching the serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Impossible => "impossible",
            PlanStatus::Deficit => "deficit",
            PlanStatus::NoClassesFound => "no_classes_found",
            PlanStatus::ImpossibleTimeframe => "impossible_timeframe",
            PlanStatus::Surplus => "surplus",
        }
    }

    /// Get status with a consistent icon for display.
    ///
    /// # Icons Used
    /// - `✓ Surplus` - target already met
    /// - `➤ Deficit` - reachable by attending classes
    /// - `✗ Impossible` / `✗ Impossible Timeframe` / `✗ No Classes Found`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Surplus.with_icon(), "✓ Surplus");
    /// assert_eq!(PlanStatus::Deficit.with_icon(), "➤ Deficit");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Surplus => "✓ Surplus",
            PlanStatus::Deficit => "➤ Deficit",
            PlanStatus::Impossible => "✗ Impossible",
            PlanStatus::ImpossibleTimeframe => "✗ Impossible Timeframe",
            PlanStatus::NoClassesFound => "✗ No Classes Found",
        }
    }
}
