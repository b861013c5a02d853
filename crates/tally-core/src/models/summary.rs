//! Totals read from an attendance summary.

use serde::{Deserialize, Serialize};

/// Aggregate class counts taken from a summary file's totals row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Total classes held
    pub total: i64,
    /// Total classes missed
    pub absent: i64,
}

impl SummaryTotals {
    /// Builds totals from two counts, taking the larger as the total.
    pub fn from_pair(first: i64, second: i64) -> Self {
        if first < second {
            Self {
                total: second,
                absent: first,
            }
        } else {
            Self {
                total: first,
                absent: second,
            }
        }
    }

    pub fn present(&self) -> i64 {
        self.total - self.absent
    }
}
