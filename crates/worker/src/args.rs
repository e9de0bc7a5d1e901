use clap::Parser;
use screener_core::domain::configuration::{
    ResultOrdering, ScoreWeights, ScreenConfiguration, Strategy, ValueRange,
};
use screener_core::domain::index::IndexName;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "screener_worker", about = "Two-phase momentum/value stock screener")]
pub struct Args {
    /// Anchor date of the price window (YYYY-MM-DD). Defaults to today's UTC date.
    #[arg(long)]
    pub as_of_date: Option<String>,

    /// Indices to screen, merged in the given order (DAX, DowJones, SP500, Nikkei).
    #[arg(long = "index", value_delimiter = ',')]
    pub indices: Vec<IndexName>,

    /// Preset for thresholds and weights; explicit flags below override it.
    #[arg(long)]
    pub strategy: Option<Strategy>,

    #[arg(long)]
    pub lookback_days: Option<usize>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_performance: Option<f64>,

    /// Calendar days of price history to request.
    #[arg(long)]
    pub history_window_days: Option<i64>,

    /// Require trading at least this many percent below the window high.
    #[arg(long, conflicts_with = "no_distance_filter")]
    pub min_distance: Option<f64>,

    #[arg(long)]
    pub no_distance_filter: bool,

    #[arg(long)]
    pub pe_min: Option<f64>,

    #[arg(long)]
    pub pe_max: Option<f64>,

    #[arg(long)]
    pub div_min: Option<f64>,

    #[arg(long)]
    pub div_max: Option<f64>,

    #[arg(long)]
    pub w_momentum: Option<f64>,

    #[arg(long)]
    pub w_turnaround: Option<f64>,

    #[arg(long)]
    pub w_dividend: Option<f64>,

    #[arg(long)]
    pub w_valuation: Option<f64>,

    /// Number of price-phase survivors passed to the fundamentals phase.
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Pause between fundamentals requests, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Final ordering: performance (default) or score.
    #[arg(long)]
    pub order_by: Option<ResultOrdering>,

    /// Write results to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl Args {
    pub fn to_configuration(&self) -> ScreenConfiguration {
        let mut cfg = match self.strategy {
            Some(strategy) => ScreenConfiguration::from_strategy(strategy),
            None => ScreenConfiguration::default(),
        };

        if !self.indices.is_empty() {
            cfg.selected_indices = self.indices.clone();
        }
        if let Some(v) = self.lookback_days {
            cfg.lookback_trading_days = v;
        }
        if let Some(v) = self.min_performance {
            cfg.min_performance_pct = v;
        }
        if let Some(v) = self.history_window_days {
            cfg.history_window_days = v;
        }
        if self.no_distance_filter {
            cfg.min_distance_from_high_pct = None;
        } else if let Some(v) = self.min_distance {
            cfg.min_distance_from_high_pct = Some(v);
        }

        cfg.pe_range = ValueRange::new(
            self.pe_min.unwrap_or(cfg.pe_range.min),
            self.pe_max.unwrap_or(cfg.pe_range.max),
        );
        cfg.dividend_range_pct = ValueRange::new(
            self.div_min.unwrap_or(cfg.dividend_range_pct.min),
            self.div_max.unwrap_or(cfg.dividend_range_pct.max),
        );

        let weight_flags = [
            self.w_momentum,
            self.w_turnaround,
            self.w_dividend,
            self.w_valuation,
        ];
        if weight_flags.iter().any(Option::is_some) {
            let base = cfg.weights.unwrap_or_default();
            cfg.weights = Some(ScoreWeights {
                momentum: self.w_momentum.unwrap_or(base.momentum),
                turnaround: self.w_turnaround.unwrap_or(base.turnaround),
                dividend: self.w_dividend.unwrap_or(base.dividend),
                valuation: self.w_valuation.unwrap_or(base.valuation),
            });
        }

        if let Some(v) = self.top_k {
            cfg.top_k = v;
        }
        if let Some(ms) = self.delay_ms {
            cfg.inter_fundamental_request_delay = Duration::from_millis(ms);
        }
        if let Some(ordering) = self.order_by {
            cfg.ordering = ordering;
        }

        cfg
    }
}
