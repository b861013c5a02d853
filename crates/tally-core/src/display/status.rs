//! Load confirmation messages.

use std::fmt;

use serde::Serialize;

/// Kind of file a [`LoadReport`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    Timetable,
    Absences,
    Summary,
}

impl LoadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadKind::Timetable => "timetable",
            LoadKind::Absences => "absences",
            LoadKind::Summary => "summary",
        }
    }
}

/// Success payload of a file load.
///
/// Failures are reported as [`crate::TallyError`] instead; a load either
/// yields a report or leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub kind: LoadKind,
    pub message: String,
}

impl LoadReport {
    pub fn new(kind: LoadKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {}: {}", self.kind.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_report_display() {
        let report = LoadReport::new(LoadKind::Summary, "40 total, 7 absent");
        assert_eq!(report.to_string(), "Loaded summary: 40 total, 7 absent\n");
    }
}
