use crate::domain::index::IndexName;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TOP_K: usize = 20;
pub const DEFAULT_LOOKBACK_TRADING_DAYS: usize = 14;
pub const DEFAULT_HISTORY_WINDOW_DAYS: i64 = 400;
pub const DEFAULT_FUNDAMENTAL_DELAY: Duration = Duration::from_millis(400);

/// Roughly a century of calendar days; keeps window arithmetic inside chrono's date range.
pub const MAX_HISTORY_WINDOW_DAYS: i64 = 36_500;

/// Upper dividend bound used when the dividend filter is switched off.
pub const DIVIDEND_CEILING_PCT: f64 = 100.0;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub momentum: f64,
    pub turnaround: f64,
    pub dividend: f64,
    pub valuation: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultOrdering {
    /// Keep the price-phase ranking.
    #[default]
    Performance,
    /// Re-rank the enriched results by composite score.
    Score,
}

impl FromStr for ResultOrdering {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "performance" | "perf" => Ok(ResultOrdering::Performance),
            "score" => Ok(ResultOrdering::Score),
            _ => anyhow::bail!("unknown ordering: {s} (expected performance or score)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Balanced,
    Growth,
    Dividend,
    Turnaround,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(Strategy::Balanced),
            "growth" => Ok(Strategy::Growth),
            "dividend" => Ok(Strategy::Dividend),
            "turnaround" => Ok(Strategy::Turnaround),
            _ => anyhow::bail!(
                "unknown strategy: {s} (expected balanced, growth, dividend or turnaround)"
            ),
        }
    }
}

struct Preset {
    min_performance_pct: f64,
    min_dividend_pct: f64,
    max_pe: f64,
    min_distance_pct: f64,
    dividend_filter: bool,
    distance_filter: bool,
    weights: ScoreWeights,
}

impl Strategy {
    fn preset(self) -> Preset {
        match self {
            Strategy::Balanced => Preset {
                min_performance_pct: 0.0,
                min_dividend_pct: 1.5,
                max_pe: 18.0,
                min_distance_pct: 15.0,
                dividend_filter: true,
                distance_filter: true,
                weights: ScoreWeights {
                    momentum: 0.4,
                    turnaround: 0.2,
                    dividend: 0.2,
                    valuation: 0.2,
                },
            },
            Strategy::Growth => Preset {
                min_performance_pct: 5.0,
                min_dividend_pct: 0.0,
                max_pe: 30.0,
                min_distance_pct: 5.0,
                dividend_filter: false,
                distance_filter: false,
                weights: ScoreWeights {
                    momentum: 0.7,
                    turnaround: 0.1,
                    dividend: 0.0,
                    valuation: 0.2,
                },
            },
            Strategy::Dividend => Preset {
                min_performance_pct: -2.0,
                min_dividend_pct: 3.0,
                max_pe: 15.0,
                min_distance_pct: 20.0,
                dividend_filter: true,
                distance_filter: true,
                weights: ScoreWeights {
                    momentum: 0.2,
                    turnaround: 0.1,
                    dividend: 0.5,
                    valuation: 0.2,
                },
            },
            Strategy::Turnaround => Preset {
                min_performance_pct: -5.0,
                min_dividend_pct: 0.5,
                max_pe: 20.0,
                min_distance_pct: 35.0,
                dividend_filter: false,
                distance_filter: true,
                weights: ScoreWeights {
                    momentum: 0.2,
                    turnaround: 0.6,
                    dividend: 0.1,
                    valuation: 0.1,
                },
            },
        }
    }
}

/// Fully resolved parameters for one screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfiguration {
    /// Merge order matters: later indices overwrite display names of earlier ones.
    pub selected_indices: Vec<IndexName>,
    pub lookback_trading_days: usize,
    pub min_performance_pct: f64,
    pub history_window_days: i64,
    /// Drop candidates trading less than this many percent below their window high.
    pub min_distance_from_high_pct: Option<f64>,
    pub pe_range: ValueRange,
    pub dividend_range_pct: ValueRange,
    pub weights: Option<ScoreWeights>,
    pub top_k: usize,
    pub inter_fundamental_request_delay: Duration,
    pub ordering: ResultOrdering,
}

impl Default for ScreenConfiguration {
    fn default() -> Self {
        Self {
            selected_indices: vec![IndexName::Dax, IndexName::DowJones],
            lookback_trading_days: DEFAULT_LOOKBACK_TRADING_DAYS,
            min_performance_pct: 0.0,
            history_window_days: DEFAULT_HISTORY_WINDOW_DAYS,
            min_distance_from_high_pct: None,
            pe_range: ValueRange::new(0.0, 30.0),
            dividend_range_pct: ValueRange::new(0.0, DIVIDEND_CEILING_PCT),
            weights: None,
            top_k: DEFAULT_TOP_K,
            inter_fundamental_request_delay: DEFAULT_FUNDAMENTAL_DELAY,
            ordering: ResultOrdering::Performance,
        }
    }
}

impl ScreenConfiguration {
    pub fn from_strategy(strategy: Strategy) -> Self {
        let p = strategy.preset();
        let dividend_range_pct = if p.dividend_filter {
            ValueRange::new(p.min_dividend_pct, DIVIDEND_CEILING_PCT)
        } else {
            ValueRange::new(0.0, DIVIDEND_CEILING_PCT)
        };

        Self {
            min_performance_pct: p.min_performance_pct,
            min_distance_from_high_pct: p.distance_filter.then_some(p.min_distance_pct),
            pe_range: ValueRange::new(0.0, p.max_pe),
            dividend_range_pct,
            weights: Some(p.weights),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.lookback_trading_days > 0, "lookback_trading_days must be > 0");
        ensure!(
            self.history_window_days <= MAX_HISTORY_WINDOW_DAYS,
            "history_window_days must be <= {MAX_HISTORY_WINDOW_DAYS} (got {})",
            self.history_window_days
        );
        let lookback = i64::try_from(self.lookback_trading_days).unwrap_or(i64::MAX);
        ensure!(
            self.history_window_days > lookback,
            "history_window_days ({}) must exceed lookback_trading_days ({})",
            self.history_window_days,
            self.lookback_trading_days
        );
        ensure!(self.min_performance_pct.is_finite(), "min_performance_pct must be finite");
        if let Some(d) = self.min_distance_from_high_pct {
            ensure!(
                d.is_finite() && d >= 0.0,
                "min_distance_from_high_pct must be >= 0 (got {d})"
            );
        }
        validate_range("pe_range", self.pe_range)?;
        validate_range("dividend_range_pct", self.dividend_range_pct)?;
        ensure!(self.top_k > 0, "top_k must be > 0");
        Ok(())
    }
}

fn validate_range(name: &str, r: ValueRange) -> anyhow::Result<()> {
    ensure!(!r.min.is_nan() && !r.max.is_nan(), "{name} bounds must be numbers");
    ensure!(r.min >= 0.0, "{name} min must be >= 0 (got {})", r.min);
    ensure!(r.max >= r.min, "{name} max must be >= min (got {r})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let cfg = ScreenConfiguration::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.top_k, 20);
        assert_eq!(cfg.inter_fundamental_request_delay, Duration::from_millis(400));
        assert!(cfg.weights.is_none());
    }

    #[test]
    fn presets_resolve_thresholds_and_weights() {
        let cfg = ScreenConfiguration::from_strategy(Strategy::Dividend);
        cfg.validate().unwrap();
        assert_eq!(cfg.min_performance_pct, -2.0);
        assert_eq!(cfg.pe_range, ValueRange::new(0.0, 15.0));
        assert_eq!(cfg.dividend_range_pct.min, 3.0);
        assert_eq!(cfg.min_distance_from_high_pct, Some(20.0));
        assert_eq!(cfg.weights.map(|w| w.dividend), Some(0.5));

        let growth = ScreenConfiguration::from_strategy(Strategy::Growth);
        assert_eq!(growth.dividend_range_pct, ValueRange::new(0.0, DIVIDEND_CEILING_PCT));
        assert_eq!(growth.min_distance_from_high_pct, None);

        let turnaround = ScreenConfiguration::from_strategy(Strategy::Turnaround);
        assert_eq!(turnaround.dividend_range_pct.min, 0.0);
        assert_eq!(turnaround.min_distance_from_high_pct, Some(35.0));
    }

    #[test]
    fn rejects_window_not_exceeding_lookback() {
        let cfg = ScreenConfiguration {
            lookback_trading_days: 30,
            history_window_days: 30,
            ..ScreenConfiguration::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_history_window_beyond_calendar_range() {
        let cfg = ScreenConfiguration {
            history_window_days: 1_000_000_000,
            ..ScreenConfiguration::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ScreenConfiguration {
            history_window_days: MAX_HISTORY_WINDOW_DAYS,
            ..ScreenConfiguration::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_lookback_that_does_not_fit_the_window() {
        let cfg = ScreenConfiguration {
            lookback_trading_days: usize::MAX,
            ..ScreenConfiguration::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must exceed lookback_trading_days"));
    }

    #[test]
    fn rejects_inverted_or_negative_ranges() {
        let inverted = ScreenConfiguration {
            pe_range: ValueRange::new(20.0, 10.0),
            ..ScreenConfiguration::default()
        };
        assert!(inverted.validate().is_err());

        let negative = ScreenConfiguration {
            dividend_range_pct: ValueRange::new(-1.0, 5.0),
            ..ScreenConfiguration::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn rejects_zero_top_k_and_zero_lookback() {
        let cfg = ScreenConfiguration {
            top_k: 0,
            ..ScreenConfiguration::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ScreenConfiguration {
            lookback_trading_days: 0,
            ..ScreenConfiguration::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = ValueRange::new(0.0, 30.0);
        assert!(r.contains(0.0));
        assert!(r.contains(30.0));
        assert!(!r.contains(30.01));
        assert!(!r.contains(-0.01));
    }

    #[test]
    fn parses_strategy_and_ordering() {
        assert_eq!("Growth".parse::<Strategy>().unwrap(), Strategy::Growth);
        assert!("yolo".parse::<Strategy>().is_err());
        assert_eq!("score".parse::<ResultOrdering>().unwrap(), ResultOrdering::Score);
    }
}
