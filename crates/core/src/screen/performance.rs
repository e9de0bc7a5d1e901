use crate::domain::configuration::ScreenConfiguration;
use crate::domain::screen::PerformanceCandidate;
use crate::ingest::provider::MarketDataClient;
use crate::ingest::types::PriceSeries;
use crate::screen::outcome::{FilterReason, SymbolOutcome, SymbolStatus};
use crate::screen::universe::{Universe, UniverseEntry};
use crate::time::window::HistoryWindow;

const MAX_LOGGED_FAILURES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanParams {
    pub lookback_trading_days: usize,
    pub min_performance_pct: f64,
    pub min_distance_from_high_pct: Option<f64>,
    pub top_k: usize,
}

impl From<&ScreenConfiguration> for ScanParams {
    fn from(cfg: &ScreenConfiguration) -> Self {
        Self {
            lookback_trading_days: cfg.lookback_trading_days,
            min_performance_pct: cfg.min_performance_pct,
            min_distance_from_high_pct: cfg.min_distance_from_high_pct,
            top_k: cfg.top_k,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PerformanceScan {
    /// One entry per universe symbol, in universe order.
    pub outcomes: Vec<SymbolStatus>,
    /// Ranked by performance (descending) and cut to top-K.
    pub candidates: Vec<PerformanceCandidate>,
    /// Symbols that passed every filter but fell outside top-K.
    pub truncated: Vec<String>,
}

pub fn evaluate_price_series(
    entry: &UniverseEntry,
    series: &PriceSeries,
    params: &ScanParams,
) -> SymbolOutcome<PerformanceCandidate> {
    let lookback = params.lookback_trading_days;
    let needed = lookback.saturating_add(1);
    if series.len() < needed {
        return SymbolOutcome::SkippedInsufficientData(format!(
            "{} bars, need {needed}",
            series.len()
        ));
    }

    let (Some(current_price), Some(reference_price)) =
        (series.last_close(), series.close_sessions_ago(lookback))
    else {
        return SymbolOutcome::SkippedInsufficientData("missing closes".to_string());
    };
    if reference_price <= 0.0 {
        return SymbolOutcome::SkippedInsufficientData(format!(
            "non-positive reference close {reference_price}"
        ));
    }

    let performance_pct = (current_price / reference_price - 1.0) * 100.0;
    if !performance_pct.is_finite() {
        return SymbolOutcome::SkippedInsufficientData("non-finite performance".to_string());
    }
    if performance_pct < params.min_performance_pct {
        return SymbolOutcome::Filtered(FilterReason::BelowMinPerformance {
            performance_pct,
            min_pct: params.min_performance_pct,
        });
    }

    let Some((high, high_date)) = series.max_high().filter(|(h, _)| *h > 0.0) else {
        return SymbolOutcome::SkippedInsufficientData("no positive high".to_string());
    };

    let candidate = PerformanceCandidate {
        symbol: entry.symbol.clone(),
        display_name: entry.display_name.clone(),
        current_price,
        lookback_performance_pct: performance_pct,
        fifty_two_week_high: high,
        fifty_two_week_high_date: high_date,
    };

    if let Some(min_distance_pct) = params.min_distance_from_high_pct {
        let distance_pct = candidate.distance_from_high_pct();
        if distance_pct > -min_distance_pct {
            return SymbolOutcome::Filtered(FilterReason::TooCloseToHigh {
                distance_pct,
                min_distance_pct,
            });
        }
    }

    SymbolOutcome::Included(candidate)
}

/// Stable sort by performance, descending; ties keep encounter order. Returns (kept, cut).
pub fn rank_and_truncate(
    mut candidates: Vec<PerformanceCandidate>,
    top_k: usize,
) -> (Vec<PerformanceCandidate>, Vec<PerformanceCandidate>) {
    candidates.sort_by(|a, b| {
        b.lookback_performance_pct
            .partial_cmp(&a.lookback_performance_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let cut = if candidates.len() > top_k {
        candidates.split_off(top_k)
    } else {
        Vec::new()
    };
    (candidates, cut)
}

pub async fn scan_performance(
    client: &dyn MarketDataClient,
    universe: &Universe,
    params: &ScanParams,
    window: HistoryWindow,
    progress_every: usize,
) -> PerformanceScan {
    let total = universe.len();
    let mut outcomes = Vec::with_capacity(total);
    let mut passed = Vec::new();
    let mut failures: usize = 0;

    for (idx, entry) in universe.iter().enumerate() {
        let outcome = match client
            .get_price_history(&entry.symbol, window.start, window.end)
            .await
        {
            Ok(series) => evaluate_price_series(entry, &series, params),
            Err(err) => {
                failures += 1;
                if failures <= MAX_LOGGED_FAILURES {
                    tracing::warn!(
                        idx,
                        symbol = %entry.symbol,
                        name = %entry.display_name,
                        failure_count = failures,
                        error = %err,
                        "price history fetch failed; skipping symbol"
                    );
                } else {
                    tracing::debug!(
                        symbol = %entry.symbol,
                        error = %err,
                        "price history fetch failed"
                    );
                }
                SymbolOutcome::SkippedFetchFailure(format!("{err:#}"))
            }
        };

        match &outcome {
            SymbolOutcome::SkippedInsufficientData(why) => {
                tracing::debug!(
                    symbol = %entry.symbol,
                    reason = %why,
                    "insufficient price history"
                );
            }
            SymbolOutcome::Filtered(reason) => {
                tracing::debug!(symbol = %entry.symbol, %reason, "filtered in price phase");
            }
            _ => {}
        }

        outcomes.push(SymbolStatus {
            symbol: entry.symbol.clone(),
            outcome: outcome.status(),
        });
        if let Some(candidate) = outcome.included() {
            passed.push(candidate);
        }

        if progress_every != 0 {
            let n = idx + 1;
            if n == 1 || n == total || n % progress_every == 0 {
                tracing::info!(
                    processed = n,
                    total,
                    passed = passed.len(),
                    failures,
                    "price scan progress"
                );
            }
        }
    }

    let (candidates, cut) = rank_and_truncate(passed, params.top_k);
    if !cut.is_empty() {
        tracing::info!(
            kept = candidates.len(),
            truncated = cut.len(),
            top_k = params.top_k,
            "truncated price-phase survivors"
        );
    }

    PerformanceScan {
        outcomes,
        candidates,
        truncated: cut.into_iter().map(|c| c.symbol).collect(),
    }
}
