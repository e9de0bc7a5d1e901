use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Survivor of the price-history phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceCandidate {
    pub symbol: String,
    pub display_name: String,
    pub current_price: f64,
    pub lookback_performance_pct: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_high_date: NaiveDate,
}

impl PerformanceCandidate {
    /// Percentage gap between the current price and the window high (zero or negative).
    pub fn distance_from_high_pct(&self) -> f64 {
        (self.current_price / self.fifty_two_week_high - 1.0) * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub trailing_pe: Option<f64>,
    pub dividend_yield_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenResult {
    pub symbol: String,
    pub display_name: String,
    pub current_price: f64,
    pub lookback_performance_pct: f64,
    pub distance_from_high_pct: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_high_date: NaiveDate,
    pub trailing_pe: f64,
    pub dividend_yield_pct: f64,
    pub score: Option<f64>,
}

impl ScreenResult {
    pub fn from_candidate(
        candidate: &PerformanceCandidate,
        trailing_pe: f64,
        dividend_yield_pct: f64,
        score: Option<f64>,
    ) -> Self {
        Self {
            symbol: candidate.symbol.clone(),
            display_name: candidate.display_name.clone(),
            current_price: candidate.current_price,
            lookback_performance_pct: candidate.lookback_performance_pct,
            distance_from_high_pct: candidate.distance_from_high_pct(),
            fifty_two_week_high: candidate.fifty_two_week_high,
            fifty_two_week_high_date: candidate.fifty_two_week_high_date,
            trailing_pe,
            dividend_yield_pct,
            score,
        }
    }
}
