//! Data models for timetables, absence history and recovery plans.
//!
//! This module contains the core domain models shared by the parsers, the
//! planner and the risk estimator. Display implementations for these models
//! are located in [`crate::display::models`] to keep data structures separate
//! from presentation.
//!
//! # Model Overview
//!
//! - [`Weekday`] and [`TimeSlot`]: the two keys of a weekly timetable
//! - [`Timetable`]: weekday → time slot → canonical subject name
//! - [`AttendanceHistory`]: slot-level [`AbsenceEvent`]s plus per-day
//!   [`DailyAggregate`]s, rebuilt from each absence file
//! - [`PlanInput`] / [`PlanResult`]: one recovery planning request and its
//!   tagged [`PlanOutcome`]
//! - [`SummaryTotals`]: totals read from an attendance summary
//!
//! # Examples
//!
//! ```rust
//! use tally_core::models::{TimeSlot, Timetable, Weekday};
//!
//! let mut timetable = Timetable::new();
//! let slot = TimeSlot::find_clock("8:45 - 9:45").unwrap();
//! timetable.insert(Weekday::Monday, slot, "MATH");
//!
//! assert_eq!(slot.to_string(), "08:45");
//! assert_eq!(timetable.subject_at(Weekday::Monday, slot), Some("MATH"));
//! ```

pub mod history;
pub mod plan;
pub mod status;
pub mod summary;
pub mod time_slot;
pub mod timetable;
pub mod weekday;


pub use history::{AbsenceEvent, AttendanceHistory, DailyAggregate};
pub use plan::{PlanInput, PlanOutcome, PlanResult, Projection, ScheduledClass};
pub use status::PlanStatus;
pub use summary::SummaryTotals;
pub use time_slot::TimeSlot;
pub use timetable::{DaySchedule, Timetable};
pub use weekday::Weekday;
