//! Forward schedule simulation.

use jiff::civil::Date;

use crate::{
    calendar::CalendarPolicy,
    models::{ScheduledClass, Timetable, Weekday},
};

/// Collects up to `needed` classes from `start` through `limit`, skipping
/// non-instructional dates. Slots within a day are taken in time order.
pub(super) fn walk(
    calendar: &CalendarPolicy,
    timetable: &Timetable,
    start: Date,
    limit: Date,
    needed: usize,
) -> Vec<ScheduledClass> {
    let mut schedule = Vec::new();
    let mut date = start;
    while schedule.len() < needed && date <= limit {
        if !calendar.is_non_instructional(date) {
            let weekday = Weekday::of(date);
            if let Some(classes) = timetable.day(weekday) {
                let remaining = needed - schedule.len();
                schedule.extend(classes.iter().take(remaining).map(|(slot, subject)| {
                    ScheduledClass {
                        date,
                        weekday,
                        slot: *slot,
                        subject: subject.clone(),
                    }
                }));
            }
        }
        match date.tomorrow() {
            Ok(next) => date = next,
            Err(_) => break,
        }
    }
    schedule
}
