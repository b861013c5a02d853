//! Display formatting for plans, timetables and reports.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and load confirmations get newtype wrappers. All output is markdown, so
//! the same text works for a terminal renderer and for plain logs.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (PlanResult,    │───▶│ (SubjectRisks,  │───▶│     Output      │
//! │  Timetable)     │    │  LoadReport)    │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: risk tables, day forecasts, off-day listings
//! - [`status`]: [`LoadReport`] confirmations
//! - [`datetime`]: `DD-MM` and `DD Mon YYYY` date formatting
//! - [`models`]: `Display` implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use tally_core::{
//!     calendar::CalendarPolicy,
//!     models::{PlanInput, TimeSlot, Timetable, Weekday},
//!     planner::RecoveryPlanner,
//! };
//!
//! let calendar = CalendarPolicy::default();
//! let mut timetable = Timetable::new();
//! timetable.insert(Weekday::Monday, TimeSlot::new(8, 45).unwrap(), "MATH");
//!
//! let result = RecoveryPlanner::new(&calendar)
//!     .with_timetable(&timetable)
//!     .plan(&PlanInput {
//!         target_percent: 75.0,
//!         total_classes: 3,
//!         absent_classes: 1,
//!         start: date(2026, 1, 11),
//!         limit: date(2026, 1, 31),
//!     });
//!
//! let output = result.to_string();
//! assert!(output.contains("**Attend 1 classes.**"));
//! assert!(output.contains("| 12-01 | Monday | 08:45 | MATH |"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{DayForecast, OffDays, SlotRisks, SubjectRisks};
pub use datetime::{LongDate, ShortDate};
pub use status::{LoadKind, LoadReport};
