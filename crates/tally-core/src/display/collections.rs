//! Collection wrapper types for risk reports and calendar listings.
//!
//! Each wrapper renders a markdown table and handles the empty case with a
//! one-line message.

use std::fmt;

use jiff::civil::Date;

use super::datetime::LongDate;
use crate::{
    calendar::OffReason,
    models::Weekday,
    risk::{RiskLevel, SlotRisk, SubjectRisk},
};

/// Newtype wrapper for displaying subject risks.
///
/// # Examples
///
/// ```rust
/// use tally_core::{display::SubjectRisks, risk::SubjectRisk};
///
/// let risks = SubjectRisks(vec![SubjectRisk {
///     subject: "SOCIAL PSYCHOLOGY".to_string(),
///     absences: 4,
///     score: 1.0,
/// }]);
/// let output = risks.to_string();
/// assert!(output.contains("| SOCIAL PSYCHOLOGY | 4 | 100% | high |"));
/// ```
pub struct SubjectRisks(pub Vec<SubjectRisk>);

impl SubjectRisks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubjectRisks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No absences recorded.");
        }
        writeln!(f, "| Subject | Absences | Score | Risk |")?;
        writeln!(f, "|:-|:-:|:-:|:-|")?;
        for risk in &self.0 {
            writeln!(
                f,
                "| {} | {} | {:.0}% | {} |",
                risk.subject,
                risk.absences,
                risk.score * 100.0,
                RiskLevel::from_score(risk.score).as_str()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying slot risks.
pub struct SlotRisks(pub Vec<SlotRisk>);

impl fmt::Display for SlotRisks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No absences recorded.");
        }
        writeln!(f, "| Day | Time | Absences | Risk |")?;
        writeln!(f, "|:-|:-:|:-:|:-|")?;
        for risk in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                risk.weekday,
                risk.slot,
                risk.absences,
                RiskLevel::from_score(risk.score).as_str()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a day-risk forecast.
pub struct DayForecast(pub Vec<(Date, f64)>);

impl fmt::Display for DayForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No instructional days in range.");
        }
        writeln!(f, "| Date | Day | Absence risk |")?;
        writeln!(f, "|:-|:-|:-:|")?;
        for (date, score) in &self.0 {
            writeln!(
                f,
                "| {} | {} | {:.0}% ({}) |",
                LongDate(*date),
                Weekday::of(*date),
                score * 100.0,
                RiskLevel::from_score(*score).as_str()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying non-instructional days.
pub struct OffDays(pub Vec<(Date, OffReason)>);

impl fmt::Display for OffDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No days off in range.");
        }
        for (date, reason) in &self.0 {
            writeln!(f, "- {} ({}): {reason}", LongDate(*date), Weekday::of(*date))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(SubjectRisks(Vec::new()).to_string(), "No absences recorded.\n");
        assert_eq!(SlotRisks(Vec::new()).to_string(), "No absences recorded.\n");
        assert_eq!(OffDays(Vec::new()).to_string(), "No days off in range.\n");
    }

    #[test]
    fn test_off_days_listing() {
        let days = OffDays(vec![
            (date(2026, 1, 25), OffReason::Sunday),
            (date(2026, 1, 26), OffReason::Holiday("Republic Day".to_string())),
        ]);
        let output = days.to_string();
        assert!(output.contains("- 25 Jan 2026 (Sunday): Sunday"));
        assert!(output.contains("- 26 Jan 2026 (Monday): Republic Day"));
    }

    #[test]
    fn test_forecast_rows() {
        let forecast = DayForecast(vec![(date(2026, 1, 27), 0.82)]);
        assert!(forecast
            .to_string()
            .contains("| 27 Jan 2026 | Tuesday | 82% (high) |"));
    }
}
