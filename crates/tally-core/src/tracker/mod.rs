//! Session state: the loaded files and everything derived from them.
//!
//! A [`Tracker`] holds one timetable, one absence history and the optional
//! totals of an attendance summary, together with the subject normalizer
//! shared by all three loaders. Every load parses into fresh values, using a
//! scratch copy of the normalizer, and swaps them in only on success. A
//! failed load therefore leaves the previous state exactly as it was.
//!
//! ```text
//!  timetable.csv ──┐
//!  absences.csv  ──┼──▶ Tracker ──▶ plan() ──▶ PlanResult
//!  summary.csv   ──┘       │
//!                          └──────▶ subject_risks() / day_risk()
//! ```

mod builder;

use std::path::Path;

use jiff::{civil::Date, Zoned};
use log::info;

pub use builder::TrackerBuilder;

use crate::{
    calendar::CalendarPolicy,
    display::{LoadKind, LoadReport},
    error::Result,
    models::{AttendanceHistory, PlanResult, SummaryTotals, Timetable},
    normalizer::SubjectNormalizer,
    params::PlanRequest,
    parser::{build_history, parse_summary, parse_timetable, Grid},
    planner::RecoveryPlanner,
    risk::{self, DayRiskModel, SlotRisk, SubjectRisk},
};

/// Main interface for loading attendance files and planning recovery.
#[derive(Debug)]
pub struct Tracker {
    calendar: CalendarPolicy,
    names: SubjectNormalizer,
    timetable: Timetable,
    history: AttendanceHistory,
    summary: Option<SummaryTotals>,
    day_model: DayRiskModel,
}

impl Tracker {
    /// Creates an empty session governed by `calendar`.
    pub fn new(calendar: CalendarPolicy) -> Self {
        Self {
            calendar,
            names: SubjectNormalizer::new(),
            timetable: Timetable::new(),
            history: AttendanceHistory::default(),
            summary: None,
            day_model: DayRiskModel::untrained(),
        }
    }

    /// Loads a timetable file, replacing the current timetable.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` or `TallyError::Csv` if the file
    /// cannot be read and `TallyError::NoTimeSlots` if no header row is
    /// found.
    pub fn load_timetable<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let grid = Grid::from_path(path.as_ref())?;
        self.load_timetable_grid(&grid)
    }

    /// Parses a timetable grid, replacing the current timetable.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NoTimeSlots` if no header row is found.
    pub fn load_timetable_grid(&mut self, grid: &Grid) -> Result<LoadReport> {
        let mut names = self.names.clone();
        let timetable = parse_timetable(grid, &mut names)?;

        let message = format!(
            "{} classes a week on {} days",
            timetable.class_count(),
            timetable.days().count()
        );
        self.names = names;
        self.timetable = timetable;
        info!("Timetable loaded: {message}");
        Ok(LoadReport::new(LoadKind::Timetable, message))
    }

    /// Loads an absence-detail file, replacing the current history.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` or `TallyError::Csv` if the file
    /// cannot be read, `TallyError::MissingColumn` without a `Date` column
    /// and `TallyError::NoValidDates` if no row has a parseable date.
    pub fn load_absences<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let grid = Grid::from_path(path.as_ref())?;
        self.load_absences_grid(&grid)
    }

    /// Builds a history from an absence grid, replacing the current one.
    ///
    /// Slot events are filtered against the timetable loaded at this point;
    /// loading a timetable afterwards does not rebuild the history.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::MissingColumn` without a `Date` column and
    /// `TallyError::NoValidDates` if no row has a parseable date.
    pub fn load_absences_grid(&mut self, grid: &Grid) -> Result<LoadReport> {
        let mut names = self.names.clone();
        let history = build_history(grid, &self.calendar, &mut names, Some(&self.timetable))?;
        let day_model = DayRiskModel::train(&history.daily);

        let message = format!(
            "{} absences over {} instructional days",
            history.absence_count(),
            history.daily.len()
        );
        self.names = names;
        self.history = history;
        self.day_model = day_model;
        info!("Absences loaded: {message}");
        Ok(LoadReport::new(LoadKind::Absences, message))
    }

    /// Loads an attendance summary, seeding subject names and storing its
    /// totals for auto-filled plan requests.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` or `TallyError::Csv` if the file
    /// cannot be read.
    pub fn load_summary<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let grid = Grid::from_path(path.as_ref())?;
        Ok(self.load_summary_grid(&grid))
    }

    /// Reads an attendance summary grid.
    ///
    /// A summary without a totals row still seeds names; previously stored
    /// totals are cleared in that case.
    pub fn load_summary_grid(&mut self, grid: &Grid) -> LoadReport {
        let report = parse_summary(grid, &mut self.names);
        self.summary = report.totals;

        let message = match report.totals {
            Some(totals) => format!(
                "{} subjects, {} classes held, {} missed",
                report.subjects_seeded, totals.total, totals.absent
            ),
            None => format!("{} subjects, no totals row", report.subjects_seeded),
        };
        LoadReport::new(LoadKind::Summary, message)
    }

    /// Plans recovery from today.
    ///
    /// # Errors
    ///
    /// See [`Tracker::plan_at`].
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult> {
        self.plan_at(request, Zoned::now().date())
    }

    /// Plans recovery treating `today` as the current date.
    ///
    /// Counts missing from the request are filled from the loaded summary.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidInput` for a target outside 0-100 and
    /// `TallyError::MissingTotals` if a count is missing and no summary
    /// totals are loaded.
    pub fn plan_at(&self, request: &PlanRequest, today: Date) -> Result<PlanResult> {
        let input = request.resolve(self.summary, &self.calendar, today)?;
        let result = RecoveryPlanner::new(&self.calendar)
            .with_timetable(&self.timetable)
            .plan(&input);
        info!("Planned {} -> {}", input.start, result.status());
        Ok(result)
    }

    pub fn calendar(&self) -> &CalendarPolicy {
        &self.calendar
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn history(&self) -> &AttendanceHistory {
        &self.history
    }

    /// Totals from the last loaded summary, if it had a totals row.
    pub fn summary(&self) -> Option<SummaryTotals> {
        self.summary
    }

    pub fn normalizer(&self) -> &SubjectNormalizer {
        &self.names
    }

    /// Most-missed subjects, worst first.
    pub fn subject_risks(&self) -> Vec<SubjectRisk> {
        risk::subject_risks(&self.history)
    }

    /// Absence counts per timetable slot.
    pub fn slot_risks(&self) -> Vec<SlotRisk> {
        risk::slot_risks(&self.history)
    }

    pub fn day_model(&self) -> &DayRiskModel {
        &self.day_model
    }

    /// Advisory probability that `date` becomes an absence day.
    pub fn day_risk(&self, date: Date) -> f64 {
        self.day_model.predict(&self.calendar, date)
    }

    /// Advisory day risk for the next `count` instructional days.
    pub fn forecast(&self, start: Date, count: usize) -> Vec<(Date, f64)> {
        self.day_model.forecast(&self.calendar, start, count)
    }

    /// Drops every loaded file and the memoized subject names.
    pub fn reset(&mut self) {
        *self = Self::new(self.calendar.clone());
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(CalendarPolicy::default())
    }
}
