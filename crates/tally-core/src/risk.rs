//! Advisory absence-risk estimates.
//!
//! Everything here is derived from a finished [`AttendanceHistory`] and is
//! meant for hints only: scores carry no accuracy guarantee, and nothing in
//! this module can fail in a way that affects planning.
//!
//! - [`subject_risks`] and [`slot_risks`] are frequency counts normalised by
//!   the worst subject or slot.
//! - [`DayRiskModel`] is a logistic-regression classifier over
//!   `(weekday, day-of-month, month)` trained on the per-day aggregates.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use jiff::civil::Date;
use linfa::prelude::*;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use log::{debug, warn};
use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::{
    calendar::CalendarPolicy,
    models::{AttendanceHistory, DailyAggregate, TimeSlot, Weekday},
};

/// Subjects reported by [`subject_risks`].
pub const MAX_RISKY_SUBJECTS: usize = 10;

/// The day model is trained only with more aggregates than this.
pub const MIN_TRAINING_DAYS: usize = 5;

const MAX_ITERATIONS: u64 = 100;

/// Coarse bucket for a `0.0..=1.0` risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            RiskLevel::High
        } else if score > 0.4 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Absence frequency of one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRisk {
    pub subject: String,
    pub absences: usize,
    /// `absences` relative to the most-missed subject
    pub score: f64,
}

/// Absence frequency of one weekly slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRisk {
    pub weekday: Weekday,
    pub slot: TimeSlot,
    pub absences: usize,
    pub score: f64,
}

/// The most-missed subjects, worst first.
///
/// Subjects with equal counts keep the order in which they first appear in
/// the history.
pub fn subject_risks(history: &AttendanceHistory) -> Vec<SubjectRisk> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for event in history.events.iter().filter(|event| event.is_absent) {
        let position = *index.entry(event.subject.as_str()).or_insert_with(|| {
            order.push((event.subject.as_str(), 0));
            order.len() - 1
        });
        order[position].1 += 1;
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    let Some(&(_, worst)) = order.first() else {
        return Vec::new();
    };
    order
        .into_iter()
        .take(MAX_RISKY_SUBJECTS)
        .map(|(subject, absences)| SubjectRisk {
            subject: subject.to_string(),
            absences,
            score: absences as f64 / worst as f64,
        })
        .collect()
}

/// Absence counts per `(weekday, slot)`, Monday first and by time within a
/// day.
pub fn slot_risks(history: &AttendanceHistory) -> Vec<SlotRisk> {
    let mut counts: BTreeMap<(Weekday, TimeSlot), usize> = BTreeMap::new();
    for event in history.events.iter().filter(|event| event.is_absent) {
        *counts.entry((event.weekday, event.slot)).or_default() += 1;
    }
    let worst = counts.values().copied().max().unwrap_or(0);
    counts
        .into_iter()
        .map(|((weekday, slot), absences)| SlotRisk {
            weekday,
            slot,
            absences,
            score: absences as f64 / worst as f64,
        })
        .collect()
}

/// Per-date absence classifier trained on daily aggregates.
#[derive(Default)]
pub struct DayRiskModel {
    fitted: Option<FittedLogisticRegression<f64, bool>>,
}

impl DayRiskModel {
    /// A model that always predicts 0.0.
    pub fn untrained() -> Self {
        Self::default()
    }

    /// Trains on `days`. Too little data, a single outcome class or a
    /// solver failure leaves the model untrained.
    pub fn train(days: &[DailyAggregate]) -> Self {
        if days.len() <= MIN_TRAINING_DAYS {
            debug!("Day risk model needs more than {MIN_TRAINING_DAYS} days, got {}", days.len());
            return Self::untrained();
        }

        let records = Array2::from(days.iter().map(|day| features(day.date)).collect::<Vec<_>>());
        let targets: Array1<bool> = days.iter().map(|day| day.is_absent).collect();
        let dataset = Dataset::new(records, targets);

        match LogisticRegression::default()
            .max_iterations(MAX_ITERATIONS)
            .fit(&dataset)
        {
            Ok(fitted) => {
                debug!("Trained day risk model on {} days", days.len());
                Self {
                    fitted: Some(fitted),
                }
            }
            Err(e) => {
                warn!("Day risk model not trained: {e}");
                Self::untrained()
            }
        }
    }

    pub fn is_trained(&self) -> bool {
        self.fitted.is_some()
    }

    /// Probability that `date` becomes an absence day, or 0.0 when the model
    /// is untrained or no classes are held that day.
    pub fn predict(&self, calendar: &CalendarPolicy, date: Date) -> f64 {
        let Some(fitted) = &self.fitted else {
            return 0.0;
        };
        if calendar.is_non_instructional(date) {
            return 0.0;
        }

        let record = Array2::from(vec![features(date)]);
        let predicted = fitted.predict(&record);
        let probabilities = fitted.predict_probabilities(&record);
        let (Some(&absent), Some(&p)) = (predicted.get(0), probabilities.get(0)) else {
            return 0.0;
        };
        // The probability refers to whichever class the model treats as
        // positive; orient it so that it always means "absent".
        if absent == (p >= 0.5) {
            p
        } else {
            1.0 - p
        }
    }

    /// Scores for the next `count` instructional dates from `start`.
    pub fn forecast(&self, calendar: &CalendarPolicy, start: Date, count: usize) -> Vec<(Date, f64)> {
        let mut scores = Vec::new();
        let mut date = start;
        while scores.len() < count {
            if !calendar.is_non_instructional(date) {
                scores.push((date, self.predict(calendar, date)));
            }
            match date.tomorrow() {
                Ok(next) => date = next,
                Err(_) => break,
            }
        }
        scores
    }
}

impl fmt::Debug for DayRiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayRiskModel")
            .field("trained", &self.is_trained())
            .finish()
    }
}

fn features(date: Date) -> [f64; 3] {
    [
        f64::from(Weekday::of(date).index()),
        f64::from(date.day()),
        f64::from(date.month()),
    ]
}
