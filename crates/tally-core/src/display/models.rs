//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. Everything renders as markdown
//! suitable for a terminal skin.

use std::fmt;

use super::datetime::{LongDate, ShortDate};
use crate::{
    calendar::OffReason,
    models::{
        AttendanceHistory, PlanOutcome, PlanResult, PlanStatus, Projection, ScheduledClass,
        Timetable, Weekday,
    },
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for OffReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffReason::Sunday => write!(f, "Sunday"),
            OffReason::OffSaturday => write!(f, "Off Saturday"),
            OffReason::Holiday(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Recovery Plan ({})", self.status().with_icon())?;
        writeln!(f)?;

        if self.total_classes > 0 {
            writeln!(
                f,
                "- Current: {:.1}% ({} of {} attended)",
                self.current_pct,
                self.total_classes - self.absent_classes,
                self.total_classes
            )?;
        } else {
            writeln!(f, "- Current: no classes held yet")?;
        }
        writeln!(f, "- Target: {:.1}%", self.target_percent)?;
        writeln!(f)?;

        match &self.outcome {
            PlanOutcome::Impossible => {
                writeln!(f, "**Impossible target.** No number of attended classes reaches it.")?;
            }
            PlanOutcome::Surplus { classes_skippable } => {
                if *classes_skippable == PlanResult::UNBOUNDED_SKIPS {
                    writeln!(f, "**Target met.** Any number of classes can be skipped.")?;
                } else {
                    writeln!(f, "**Target met.** You can skip {classes_skippable} classes.")?;
                }
            }
            PlanOutcome::Deficit {
                classes_needed,
                projection,
            } => {
                writeln!(f, "**Attend {classes_needed} classes.**")?;
                match projection {
                    Some(projection) if !projection.schedule.is_empty() => {
                        writeln!(
                            f,
                            "That takes {} days, until {}.",
                            projection.days_needed,
                            LongDate(projection.end_date)
                        )?;
                        fmt_schedule(f, projection)?;
                    }
                    Some(_) => {}
                    None => writeln!(f, "Load a timetable to see which classes.")?,
                }
            }
            PlanOutcome::NoClassesFound {
                classes_needed,
                end_date,
            } => {
                writeln!(
                    f,
                    "**No classes found** from {} on; {classes_needed} are needed. \
                     The timetable is empty or does not match the window.",
                    LongDate(*end_date)
                )?;
            }
            PlanOutcome::ImpossibleTimeframe {
                classes_needed,
                max_possible,
                projection,
            } => {
                writeln!(
                    f,
                    "**Impossible by {}.** Only {} of {classes_needed} needed classes fit; \
                     the best reachable is {max_possible:.1}%.",
                    LongDate(projection.end_date),
                    projection.schedule.len()
                )?;
                fmt_schedule(f, projection)?;
            }
        }

        Ok(())
    }
}

fn fmt_schedule(f: &mut fmt::Formatter<'_>, projection: &Projection) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "## Schedule")?;
    writeln!(f)?;
    writeln!(f, "| Date | Day | Time | Subject |")?;
    writeln!(f, "|:-:|:-|:-:|:-|")?;
    for class in &projection.schedule {
        write!(f, "{class}")?;
    }
    Ok(())
}

impl fmt::Display for ScheduledClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {} | {} | {} |",
            ShortDate(self.date),
            self.weekday,
            self.slot,
            self.subject
        )
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No classes in timetable.");
        }
        writeln!(f, "# Timetable ({} classes a week)", self.class_count())?;
        for (day, classes) in self.days() {
            writeln!(f)?;
            writeln!(f, "## {day}")?;
            writeln!(f)?;
            for (slot, subject) in classes {
                writeln!(f, "- {slot} {subject}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for AttendanceHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Absence History")?;
        writeln!(f)?;
        let Some((first, last)) = self.date_range() else {
            return writeln!(f, "No instructional days recorded.");
        };
        writeln!(
            f,
            "- Days: {} ({} to {})",
            self.daily.len(),
            LongDate(first),
            LongDate(last)
        )?;
        writeln!(f, "- Days with absences: {}", self.absent_days())?;
        writeln!(f, "- Missed classes: {}", self.absence_count())?;
        Ok(())
    }
}
