//! Timetable extraction from a loosely structured grid.
//!
//! Timetable exports rarely share a layout. The parser relies on two cues
//! only:
//!
//! - the first row holding at least [`MIN_TIME_COLUMNS`] time-of-day cells is
//!   the header; its columns define the time slots,
//! - a row whose first cell reads as a weekday name (`Monday`..`Saturday`,
//!   punctuation ignored) holds that day's classes.
//!
//! Placeholder cells such as breaks and session headers are never stored.

use std::collections::BTreeMap;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Grid;
use crate::{
    error::{Result, TallyError},
    models::{TimeSlot, Timetable, Weekday},
    normalizer::SubjectNormalizer,
};

/// Time cells a row needs to be taken as the header.
pub const MIN_TIME_COLUMNS: usize = 3;

/// Cells equal to one of these (case-insensitively) are not classes.
const PLACEHOLDERS: [&str; 8] = [
    "nan",
    "",
    "break",
    "lunch",
    "mentoring",
    "session",
    "course code",
    "time",
];

/// Cells this short or shorter are not classes.
const MAX_PLACEHOLDER_CHARS: usize = 2;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]").expect("valid regex"));

/// Parses a timetable grid, normalizing subject names through `names`.
///
/// # Errors
///
/// Returns `TallyError::NoTimeSlots` if no header row with enough time cells
/// exists.
pub fn parse_timetable(grid: &Grid, names: &mut SubjectNormalizer) -> Result<Timetable> {
    let columns = detect_time_columns(grid).ok_or(TallyError::NoTimeSlots {
        required: MIN_TIME_COLUMNS,
    })?;
    debug!(
        "Time columns: {}",
        columns
            .iter()
            .map(|(col, slot)| format!("{col}={slot}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut timetable = Timetable::new();
    for row in grid.rows() {
        let Some(day) = row.first().and_then(|label| row_weekday(label)) else {
            continue;
        };
        for (&column, &slot) in &columns {
            let raw = row.get(column).map_or("", |cell| cell.trim());
            if is_placeholder(raw) {
                continue;
            }
            timetable.insert(day, slot, names.normalize(raw));
        }
    }

    info!(
        "Parsed {} classes across {} days",
        timetable.class_count(),
        timetable.days().count()
    );
    Ok(timetable)
}

/// Column → slot mapping taken from the first row with enough time cells.
fn detect_time_columns(grid: &Grid) -> Option<BTreeMap<usize, TimeSlot>> {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(col, cell)| TimeSlot::find_clock(cell.trim()).map(|slot| (col, slot)))
                .collect::<BTreeMap<_, _>>()
        })
        .find(|columns| columns.len() >= MIN_TIME_COLUMNS)
}

/// Weekday named by a row label; Sunday never holds classes.
fn row_weekday(label: &str) -> Option<Weekday> {
    let cleaned = NON_WORD.replace_all(&label.trim().to_lowercase(), "").into_owned();
    match cleaned.parse() {
        Ok(Weekday::Sunday) | Err(_) => None,
        Ok(day) => Some(day),
    }
}

fn is_placeholder(cell: &str) -> bool {
    cell.chars().count() <= MAX_PLACEHOLDER_CHARS
        || PLACEHOLDERS
            .iter()
            .any(|placeholder| cell.eq_ignore_ascii_case(placeholder))
}
