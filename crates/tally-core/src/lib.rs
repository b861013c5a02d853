//! Core library for the Tally attendance planner.
//!
//! This crate reads timetable, absence and attendance-summary exports,
//! builds an absence history, and answers one question: how many classes
//! must be attended (or may be skipped) to reach a target attendance
//! percentage, and on which dates those classes fall.
//!
//! # Components
//!
//! - [`calendar`]: which dates have no classes, and when a semester ends
//! - [`parser`]: CSV grids, timetable detection, absence history, summaries
//! - [`normalizer`]: canonical subject names from noisy labels
//! - [`planner`]: the recovery arithmetic and the schedule simulation
//! - [`risk`]: advisory absence-risk scores, never consulted by the planner
//! - [`tracker`]: session state tying the loaders and the planner together
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Tables for risk reports, forecasts
//!   and load confirmations
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use tally_core::{models::PlanStatus, params::PlanRequest, parser::Grid, Tracker};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = Tracker::default();
//!
//! let timetable = "Day,8:45,9:45,10:45\n\
//!                  Monday,MATH MTH101,PHYSICS PHY101,Lunch\n";
//! let report = tracker.load_timetable_grid(&Grid::from_reader(timetable.as_bytes())?)?;
//! println!("{report}");
//!
//! let request = PlanRequest {
//!     total: Some(40),
//!     absent: Some(14),
//!     start: Some(date(2026, 1, 5)),
//!     ..PlanRequest::default()
//! };
//! let plan = tracker.plan_at(&request, date(2026, 1, 5))?;
//! assert_eq!(plan.status(), PlanStatus::Deficit);
//! assert_eq!(plan.classes_needed(), Some(16));
//! println!("{plan}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
pub mod display;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod params;
pub mod parser;
pub mod planner;
pub mod risk;
pub mod tracker;

// Re-export commonly used types
pub use calendar::{CalendarConfig, CalendarPolicy};
pub use error::{Result, TallyError};
pub use models::{PlanOutcome, PlanResult, PlanStatus, Timetable};
pub use normalizer::SubjectNormalizer;
pub use params::{PlanRequest, PlanWindow};
pub use planner::RecoveryPlanner;
pub use tracker::{Tracker, TrackerBuilder};
