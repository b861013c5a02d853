//! Command-line interface definitions using clap
//!
//! Argument structs carry the clap derives; each converts into the matching
//! core parameter type via `From`, so `tally-core` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use tally_core::{params::DEFAULT_TARGET_PERCENT, PlanRequest, PlanWindow};

/// Days listed by `tally calendar` when `--days` is not given.
const DEFAULT_CALENDAR_DAYS: i64 = 30;

/// Longest listing `tally calendar` accepts, about ten years.
const MAX_CALENDAR_DAYS: i64 = 3660;

/// Attendance tracking and recovery planning
///
/// Tally reads timetable, absence and attendance-summary exports (CSV) and
/// works out how many classes must be attended to reach a target attendance
/// percentage, and on which dates those classes fall.
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Path to a JSON calendar configuration. Defaults to
    /// $XDG_CONFIG_HOME/tally/calendar.json, then the built-in calendar
    #[arg(long, global = true)]
    pub calendar_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tally CLI
///
/// Without a command, tally prints the calendar for the next 30 days.
#[derive(Subcommand)]
pub enum Commands {
    /// Plan how to reach a target attendance
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Parse and print a timetable
    #[command(alias = "t")]
    Timetable(TimetableArgs),
    /// Summarise an absence history
    History(HistoryArgs),
    /// Show advisory absence-risk reports
    Risk(RiskArgs),
    /// Show the semester end and upcoming days off
    #[command(alias = "cal")]
    Calendar(CalendarArgs),
}

/// Plan recovery toward a target attendance percentage
///
/// Counts may be given explicitly or taken from an attendance summary.
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Timetable export used to schedule the classes to attend
    #[arg(long)]
    pub timetable: Option<PathBuf>,

    /// Absence-detail export to load alongside the timetable
    #[arg(long)]
    pub absences: Option<PathBuf>,

    /// Attendance summary used to fill in missing counts
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Classes held so far
    #[arg(long, allow_negative_numbers = true)]
    pub total: Option<i64>,

    /// Classes missed so far
    #[arg(long, allow_negative_numbers = true)]
    pub absent: Option<i64>,

    /// Target attendance percentage
    #[arg(long, default_value_t = DEFAULT_TARGET_PERCENT)]
    pub target: f64,

    /// First date you can attend (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start: Option<Date>,

    /// Last date to schedule: six-months, semester-end or YYYY-MM-DD
    #[arg(long, default_value = "six-months")]
    pub until: PlanWindow,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&PlanArgs> for PlanRequest {
    fn from(val: &PlanArgs) -> Self {
        PlanRequest {
            target_percent: val.target,
            total: val.total,
            absent: val.absent,
            start: val.start,
            window: val.until,
        }
    }
}

/// Parse a timetable export
#[derive(ClapArgs)]
pub struct TimetableArgs {
    /// Timetable CSV file
    pub file: PathBuf,
}

/// Build an absence history from an absence-detail export
#[derive(ClapArgs)]
pub struct HistoryArgs {
    /// Absence-detail CSV file
    pub file: PathBuf,

    /// Timetable export; absences outside it are not counted per slot
    #[arg(long)]
    pub timetable: Option<PathBuf>,
}

/// Rank subjects and slots by absences and forecast risky days
#[derive(ClapArgs)]
pub struct RiskArgs {
    /// Absence-detail CSV file
    pub file: PathBuf,

    /// Timetable export; absences outside it are not counted per slot
    #[arg(long)]
    pub timetable: Option<PathBuf>,

    /// Instructional days to forecast
    #[arg(long, default_value_t = 7)]
    pub days: usize,

    /// First date of the forecast (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start: Option<Date>,
}

/// Show calendar information
#[derive(ClapArgs)]
pub struct CalendarArgs {
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start: Option<Date>,

    /// Number of days to list
    #[arg(
        long,
        default_value_t = DEFAULT_CALENDAR_DAYS,
        value_parser = clap::value_parser!(i64).range(1..=MAX_CALENDAR_DAYS)
    )]
    pub days: i64,
}

impl Default for CalendarArgs {
    fn default() -> Self {
        Self {
            start: None,
            days: DEFAULT_CALENDAR_DAYS,
        }
    }
}
