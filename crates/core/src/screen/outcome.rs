use crate::domain::configuration::ValueRange;
use serde::Serialize;
use std::fmt;

/// Why a symbol left the funnel at a given stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SymbolOutcome<T> {
    Included(T),
    Filtered(FilterReason),
    SkippedInsufficientData(String),
    SkippedFetchFailure(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FilterReason {
    BelowMinPerformance { performance_pct: f64, min_pct: f64 },
    TooCloseToHigh { distance_pct: f64, min_distance_pct: f64 },
    PeOutOfRange { pe: f64, range: ValueRange },
    DividendOutOfRange { dividend_pct: f64, range: ValueRange },
}

impl<T> SymbolOutcome<T> {
    pub fn is_included(&self) -> bool {
        matches!(self, SymbolOutcome::Included(_))
    }

    pub fn included(self) -> Option<T> {
        match self {
            SymbolOutcome::Included(v) => Some(v),
            _ => None,
        }
    }

    /// Same outcome with the payload dropped, for run reports.
    pub fn status(&self) -> SymbolOutcome<()> {
        match self {
            SymbolOutcome::Included(_) => SymbolOutcome::Included(()),
            SymbolOutcome::Filtered(r) => SymbolOutcome::Filtered(r.clone()),
            SymbolOutcome::SkippedInsufficientData(s) => {
                SymbolOutcome::SkippedInsufficientData(s.clone())
            }
            SymbolOutcome::SkippedFetchFailure(s) => SymbolOutcome::SkippedFetchFailure(s.clone()),
        }
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterReason::BelowMinPerformance {
                performance_pct,
                min_pct,
            } => write!(f, "performance {performance_pct:.2}% < {min_pct}%"),
            FilterReason::TooCloseToHigh {
                distance_pct,
                min_distance_pct,
            } => write!(
                f,
                "distance from high {distance_pct:.2}% is within {min_distance_pct}%"
            ),
            FilterReason::PeOutOfRange { pe, range } => write!(f, "P/E {pe:.2} outside {range}"),
            FilterReason::DividendOutOfRange {
                dividend_pct,
                range,
            } => write!(f, "dividend {dividend_pct:.2}% outside {range}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolStatus {
    pub symbol: String,
    pub outcome: SymbolOutcome<()>,
}

/// Tally of outcomes by kind: (included, filtered, insufficient data, fetch failures).
pub fn tally(statuses: &[SymbolStatus]) -> (usize, usize, usize, usize) {
    let mut out = (0, 0, 0, 0);
    for s in statuses {
        match s.outcome {
            SymbolOutcome::Included(()) => out.0 += 1,
            SymbolOutcome::Filtered(_) => out.1 += 1,
            SymbolOutcome::SkippedInsufficientData(_) => out.2 += 1,
            SymbolOutcome::SkippedFetchFailure(_) => out.3 += 1,
        }
    }
    out
}
