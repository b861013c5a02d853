//! Attendance-summary reader.
//!
//! A summary export lists one subject per row under a `Subject...` header and
//! ends with a totals row. Subject names found here are already clean, so
//! they are seeded into the normalizer ahead of any timetable or absence
//! parsing. The totals row feeds auto-filled plan requests.

use std::collections::BTreeSet;

use log::{debug, info};
use serde::Serialize;

use super::Grid;
use crate::{models::SummaryTotals, normalizer::SubjectNormalizer};

/// Numbers a totals row needs before it is trusted.
const MIN_TOTALS_NUMBERS: usize = 3;

/// What a summary file contributed to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Distinct subject names seeded into the normalizer
    pub subjects_seeded: usize,

    /// Totals, when a usable totals row was found
    pub totals: Option<SummaryTotals>,
}

/// Reads subject names and totals from a summary grid.
///
/// A missing totals row is not an error: the seeded names are still useful,
/// and [`SummaryReport::totals`] is simply `None`.
pub fn parse_summary(grid: &Grid, names: &mut SubjectNormalizer) -> SummaryReport {
    let subjects_seeded = seed_subjects(grid, names);
    let totals = grid.rows().iter().find_map(|row| totals_in(row));
    match totals {
        Some(totals) => info!(
            "Summary: {} subjects, {} total / {} absent",
            subjects_seeded, totals.total, totals.absent
        ),
        None => info!("Summary: {subjects_seeded} subjects, no totals row"),
    }
    SummaryReport {
        subjects_seeded,
        totals,
    }
}

fn seed_subjects(grid: &Grid, names: &mut SubjectNormalizer) -> usize {
    let Some(column) = grid
        .row(0)
        .and_then(|header| header.iter().position(|label| label.contains("Subject")))
    else {
        debug!("Summary has no subject column");
        return 0;
    };

    let seeded: BTreeSet<&str> = grid
        .rows()
        .iter()
        .skip(1)
        .map(|row| row[column].trim())
        .filter(|cell| !cell.is_empty() && !cell.eq_ignore_ascii_case("nan"))
        .collect();
    for subject in &seeded {
        names.seed(subject);
    }
    seeded.len()
}

/// Totals carried by `row`, if it is a totals row with enough numbers.
fn totals_in(row: &[String]) -> Option<SummaryTotals> {
    let key = row
        .iter()
        .take(3)
        .map(|cell| cell.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if !key.contains("total") || key.contains("percentage") {
        return None;
    }

    let numbers: Vec<i64> = row.iter().filter_map(|cell| parse_count(cell)).collect();
    if numbers.len() < MIN_TOTALS_NUMBERS {
        debug!("Totals row has only {} numbers", numbers.len());
        return None;
    }
    let totals = SummaryTotals::from_pair(numbers[numbers.len() - 3], numbers[numbers.len() - 1]);
    Some(totals)
}

/// Parses `42`, `42.0` or `87.5%`, truncating toward zero.
#[allow(clippy::cast_possible_truncation)]
fn parse_count(cell: &str) -> Option<i64> {
    let value: f64 = cell.replace('%', "").trim().parse().ok()?;
    value.is_finite().then(|| value.trunc() as i64)
}
