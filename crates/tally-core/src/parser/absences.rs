//! Attendance history builder.
//!
//! An absence log has one row per date and one column per time slot. The
//! header row must contain a `Date` column; slot columns are recognised by an
//! hour-minute pair in their label (`P8-45AM`, `P13:45PM`), and an optional
//! column whose label contains `Total` (case-sensitive) holds the day's absence count. A slot
//! cell with any content other than `nan` marks that class as missed.

use log::{debug, info};

use super::{parse_day_first, Grid};
use crate::{
    calendar::CalendarPolicy,
    error::{Result, TallyError},
    models::{AbsenceEvent, AttendanceHistory, DailyAggregate, TimeSlot, Timetable, Weekday},
    normalizer::SubjectNormalizer,
};

const DATE_COLUMN: &str = "Date";
const TOTAL_MARKER: &str = "Total";

/// Column roles detected from the header row.
#[derive(Debug)]
struct Layout {
    date: usize,
    total: Option<usize>,
    slots: Vec<(usize, TimeSlot)>,
}

impl Layout {
    fn detect(header: &[String]) -> Result<Self> {
        let date = header
            .iter()
            .position(|label| label.trim().eq_ignore_ascii_case(DATE_COLUMN))
            .ok_or_else(|| TallyError::missing_column(DATE_COLUMN))?;
        let total = header
            .iter()
            .enumerate()
            .find(|(col, label)| *col != date && label.contains(TOTAL_MARKER))
            .map(|(col, _)| col);

        let slots = header
            .iter()
            .enumerate()
            .filter(|(col, label)| {
                *col != date && Some(*col) != total && !label.to_lowercase().contains("percent")
            })
            .filter_map(|(col, label)| TimeSlot::find_in_label(label).map(|slot| (col, slot)))
            .collect();

        Ok(Self { date, total, slots })
    }
}

/// Builds the absence history from an absence log grid.
///
/// Non-instructional dates are skipped entirely. When `timetable` holds at
/// least one class, slot events are kept only for `(weekday, slot)` pairs it
/// schedules; the day's aggregate still counts every marked cell.
///
/// # Errors
///
/// Returns `TallyError::MissingColumn` without a `Date` header and
/// `TallyError::NoValidDates` if no row carries a parseable date.
pub fn build_history(
    grid: &Grid,
    calendar: &CalendarPolicy,
    names: &mut SubjectNormalizer,
    timetable: Option<&Timetable>,
) -> Result<AttendanceHistory> {
    let header = grid
        .row(0)
        .ok_or_else(|| TallyError::missing_column(DATE_COLUMN))?;
    let layout = Layout::detect(header)?;
    debug!(
        "Absence layout: date column {}, total column {:?}, {} slot columns",
        layout.date,
        layout.total,
        layout.slots.len()
    );

    let dated_rows: Vec<_> = grid
        .rows()
        .iter()
        .skip(1)
        .filter_map(|row| parse_day_first(&row[layout.date]).map(|date| (date, row)))
        .collect();
    if dated_rows.is_empty() {
        return Err(TallyError::NoValidDates);
    }

    let timetable = timetable.filter(|timetable| !timetable.is_empty());
    let mut history = AttendanceHistory::default();
    for (date, row) in dated_rows {
        if calendar.is_non_instructional(date) {
            debug!("Skipping non-instructional date {date}");
            continue;
        }
        let weekday = Weekday::of(date);
        let mut is_absent = layout
            .total
            .and_then(|col| row[col].trim().parse::<f64>().ok())
            .is_some_and(|count| count > 0.0);

        for &(col, slot) in &layout.slots {
            let cell = row[col].trim();
            if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
                continue;
            }
            is_absent = true;
            let subject = names.normalize(cell);
            if timetable.is_some_and(|timetable| !timetable.contains(weekday, slot)) {
                debug!("{date} {slot} '{subject}' is not in the timetable");
                continue;
            }
            history.events.push(AbsenceEvent {
                date,
                weekday,
                slot,
                subject,
                is_absent: true,
            });
        }
        history.daily.push(DailyAggregate { date, is_absent });
    }

    info!(
        "Built history: {} absences over {} instructional days",
        history.absence_count(),
        history.daily.len()
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter().map(|row| row.to_vec()).collect()
    }

    fn slot(text: &str) -> TimeSlot {
        text.parse().unwrap()
    }

    fn build(grid: &Grid, timetable: Option<&Timetable>) -> Result<AttendanceHistory> {
        build_history(
            grid,
            &CalendarPolicy::default(),
            &mut SubjectNormalizer::new(),
            timetable,
        )
    }

    #[test]
    fn test_marked_cells_become_events() {
        let grid = grid(&[
            &["Date", "P8-45AM", "P9-45AM", "Total"],
            &["05/01/2026", "SOCIAL PSYCHOLOGY BPSY201-4", "nan", "1"],
            &["06/01/2026", "", "BPSY201-4", "1"],
            &["07/01/2026", "", "", "0"],
        ]);
        let history = build(&grid, None).unwrap();

        assert_eq!(history.events.len(), 2);
        let first = &history.events[0];
        assert_eq!(first.date, date(2026, 1, 5));
        assert_eq!(first.weekday, Weekday::Monday);
        assert_eq!(first.slot, slot("08:45"));
        assert_eq!(first.subject, "SOCIAL PSYCHOLOGY");
        assert!(first.is_absent);
        assert_eq!(history.events[1].subject, "SOCIAL PSYCHOLOGY");
        assert_eq!(history.events[1].slot, slot("09:45"));

        let daily: Vec<_> = history.daily.iter().map(|day| day.is_absent).collect();
        assert_eq!(daily, [true, true, false]);
    }

    #[test]
    fn test_total_column_alone_marks_day_absent() {
        let grid = grid(&[
            &["Date", "P8-45AM", "Total Absent"],
            &["05/01/2026", "", "2"],
        ]);
        let history = build(&grid, None).unwrap();
        assert!(history.events.is_empty());
        assert!(history.daily[0].is_absent);
    }

    #[test]
    fn test_total_column_match_is_case_sensitive() {
        let grid = grid(&[
            &["Date", "P8-45AM", "total"],
            &["05/01/2026", "", "2"],
        ]);
        let history = build(&grid, None).unwrap();
        assert!(!history.daily[0].is_absent);
    }

    #[test]
    fn test_off_days_are_skipped() {
        let grid = grid(&[
            &["Date", "P8-45AM"],
            // Sunday
            &["04/01/2026", "MATH"],
            // third Saturday
            &["17/01/2026", "MATH"],
            // Republic Day
            &["26/01/2026", "MATH"],
            // ordinary Saturday
            &["10/01/2026", "MATH"],
        ]);
        let history = build(&grid, None).unwrap();
        assert_eq!(history.daily.len(), 1);
        assert_eq!(history.events[0].date, date(2026, 1, 10));
    }

    #[test]
    fn test_unparseable_dates_are_dropped() {
        let grid = grid(&[
            &["Date", "P8-45AM"],
            &["Total", "3"],
            &["05/01/2026", "MATH"],
            &["", ""],
        ]);
        let history = build(&grid, None).unwrap();
        assert_eq!(history.daily.len(), 1);
    }

    #[test]
    fn test_no_valid_dates_is_an_error() {
        let grid = grid(&[&["Date", "P8-45AM"], &["someday", "MATH"]]);
        assert!(matches!(build(&grid, None), Err(TallyError::NoValidDates)));
    }

    #[test]
    fn test_missing_date_column_is_an_error() {
        let grid = grid(&[&["Day", "P8-45AM"], &["05/01/2026", "MATH"]]);
        let err = build(&grid, None).unwrap_err();
        assert!(matches!(err, TallyError::MissingColumn { ref column } if column == "Date"));

        let err = build(&Grid::default(), None).unwrap_err();
        assert!(matches!(err, TallyError::MissingColumn { .. }));
    }

    #[test]
    fn test_percentage_and_unlabelled_columns_are_ignored() {
        let grid = grid(&[
            &["Date", "P8-45AM", "Remarks", "Percentage 10-20"],
            &["05/01/2026", "", "late", "50"],
        ]);
        let history = build(&grid, None).unwrap();
        assert!(history.events.is_empty());
        assert!(!history.daily[0].is_absent);
    }

    #[test]
    fn test_events_are_filtered_by_timetable() {
        let mut timetable = Timetable::new();
        timetable.insert(Weekday::Monday, slot("08:45"), "MATH");
        let grid = grid(&[
            &["Date", "P8-45AM", "P9-45AM"],
            &["05/01/2026", "MATH", "PHYSICS"],
            &["06/01/2026", "MATH", ""],
        ]);

        let history = build(&grid, Some(&timetable)).unwrap();
        assert_eq!(history.events.len(), 1);
        assert_eq!(history.events[0].subject, "MATH");
        assert!(history.daily.iter().all(|day| day.is_absent));

        let unfiltered = build(&grid, Some(&Timetable::new())).unwrap();
        assert_eq!(unfiltered.events.len(), 3);
    }
}
