//! Command handlers.
//!
//! Each handler loads the files named on the command line into the
//! [`Tracker`], then renders the result as markdown. Load confirmations are
//! printed ahead of the result so the user sees what was read.

use std::path::Path;

use anyhow::{Context, Result};
use jiff::{civil::Date, Span, Zoned};
use log::debug;
use tally_core::{
    display::{DayForecast, LoadReport, LongDate, OffDays, SlotRisks, SubjectRisks},
    PlanRequest, Tracker,
};

use crate::{
    args::{CalendarArgs, HistoryArgs, PlanArgs, RiskArgs, TimetableArgs},
    renderer::TerminalRenderer,
};

/// Handler for CLI commands
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub fn handle_plan(mut self, args: PlanArgs) -> Result<()> {
        let mut reports = Vec::new();
        if let Some(path) = &args.summary {
            reports.push(
                self.tracker
                    .load_summary(path)
                    .with_context(|| format!("Failed to load summary '{}'", path.display()))?,
            );
        }
        if let Some(path) = &args.timetable {
            reports.push(self.load_timetable(path)?);
        }
        if let Some(path) = &args.absences {
            reports.push(self.load_absences(path)?);
        }

        let request = PlanRequest::from(&args);
        let result = self
            .tracker
            .plan(&request)
            .context("Failed to plan recovery")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let mut sections: Vec<String> = reports.iter().map(LoadReport::to_string).collect();
        sections.push(result.to_string());
        self.renderer.render_all(sections);
        Ok(())
    }

    pub fn handle_timetable(mut self, args: TimetableArgs) -> Result<()> {
        let report = self.load_timetable(&args.file)?;
        self.renderer
            .render_all([report.to_string(), self.tracker.timetable().to_string()]);
        Ok(())
    }

    pub fn handle_history(mut self, args: HistoryArgs) -> Result<()> {
        let mut sections = Vec::new();
        if let Some(path) = &args.timetable {
            sections.push(self.load_timetable(path)?.to_string());
        }
        sections.push(self.load_absences(&args.file)?.to_string());
        sections.push(self.tracker.history().to_string());
        self.renderer.render_all(sections);
        Ok(())
    }

    pub fn handle_risk(mut self, args: RiskArgs) -> Result<()> {
        if let Some(path) = &args.timetable {
            self.load_timetable(path)?;
        }
        self.load_absences(&args.file)?;

        let start = args.start.unwrap_or_else(today);
        let forecast = if self.tracker.day_model().is_trained() {
            DayForecast(self.tracker.forecast(start, args.days)).to_string()
        } else {
            "Not enough history to forecast risky days.\n".to_string()
        };

        self.renderer.render_all([
            format!(
                "# Subjects Most Missed\n\n{}",
                SubjectRisks(self.tracker.subject_risks())
            ),
            format!("# Riskiest Slots\n\n{}", SlotRisks(self.tracker.slot_risks())),
            format!("# Day Risk from {}\n\n{forecast}", LongDate(start)),
        ]);
        Ok(())
    }

    pub fn handle_calendar(self, args: CalendarArgs) -> Result<()> {
        let start = args.start.unwrap_or_else(today);
        let last = Span::new()
            .try_days(args.days.max(1).saturating_sub(1))
            .and_then(|span| start.checked_add(span))
            .unwrap_or(Date::MAX);
        let calendar = self.tracker.calendar();
        debug!("Listing days off from {start} to {last}");

        self.renderer.render_all([
            format!(
                "# Calendar\n\n- Semester ends: {}",
                LongDate(calendar.semester_end_date(start))
            ),
            format!(
                "## Days off, {} to {}\n\n{}",
                LongDate(start),
                LongDate(last),
                OffDays(calendar.off_days(start, last))
            ),
        ]);
        Ok(())
    }

    fn load_timetable(&mut self, path: &Path) -> Result<LoadReport> {
        self.tracker
            .load_timetable(path)
            .with_context(|| format!("Failed to load timetable '{}'", path.display()))
    }

    fn load_absences(&mut self, path: &Path) -> Result<LoadReport> {
        self.tracker
            .load_absences(path)
            .with_context(|| format!("Failed to load absences '{}'", path.display()))
    }
}

fn today() -> Date {
    Zoned::now().date()
}
