use crate::domain::configuration::{ScoreWeights, ScreenConfiguration, ValueRange};
use crate::domain::screen::{FundamentalSnapshot, PerformanceCandidate, ScreenResult};
use crate::ingest::provider::MarketDataClient;
use crate::screen::outcome::{FilterReason, SymbolOutcome, SymbolStatus};
use crate::screen::scoring::composite_score;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichParams {
    pub pe_range: ValueRange,
    pub dividend_range_pct: ValueRange,
    pub weights: Option<ScoreWeights>,
    /// Minimum gap between two fundamentals requests.
    pub inter_request_delay: Duration,
}

impl From<&ScreenConfiguration> for EnrichParams {
    fn from(cfg: &ScreenConfiguration) -> Self {
        Self {
            pe_range: cfg.pe_range,
            dividend_range_pct: cfg.dividend_range_pct,
            weights: cfg.weights,
            inter_request_delay: cfg.inter_fundamental_request_delay,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    /// One entry per candidate, in the order received.
    pub outcomes: Vec<SymbolStatus>,
    pub results: Vec<ScreenResult>,
}

/// P/E is required; a missing dividend yield counts as 0%.
pub fn evaluate_fundamentals(
    candidate: &PerformanceCandidate,
    snapshot: &FundamentalSnapshot,
    params: &EnrichParams,
) -> SymbolOutcome<ScreenResult> {
    let Some(pe) = snapshot.trailing_pe else {
        return SymbolOutcome::SkippedInsufficientData("trailing P/E unavailable".to_string());
    };
    let dividend_pct = snapshot.dividend_yield_pct.unwrap_or(0.0);

    if !params.pe_range.contains(pe) {
        return SymbolOutcome::Filtered(FilterReason::PeOutOfRange {
            pe,
            range: params.pe_range,
        });
    }
    if !params.dividend_range_pct.contains(dividend_pct) {
        return SymbolOutcome::Filtered(FilterReason::DividendOutOfRange {
            dividend_pct,
            range: params.dividend_range_pct,
        });
    }

    let score = params
        .weights
        .map(|w| composite_score(candidate, pe, dividend_pct, &w, params.pe_range.max));

    SymbolOutcome::Included(ScreenResult::from_candidate(
        candidate,
        pe,
        dividend_pct,
        score,
    ))
}

pub async fn enrich_fundamentals(
    client: &dyn MarketDataClient,
    candidates: &[PerformanceCandidate],
    params: &EnrichParams,
) -> Enrichment {
    let mut outcomes = Vec::with_capacity(candidates.len());
    let mut results = Vec::new();

    for (idx, candidate) in candidates.iter().enumerate() {
        // The delay applies whatever happened to the previous candidate: its request was made.
        if idx != 0 && !params.inter_request_delay.is_zero() {
            tokio::time::sleep(params.inter_request_delay).await;
        }

        let outcome = match client.get_fundamentals(&candidate.symbol).await {
            Ok(snapshot) => evaluate_fundamentals(candidate, &snapshot, params),
            Err(err) => {
                tracing::warn!(
                    idx,
                    symbol = %candidate.symbol,
                    name = %candidate.display_name,
                    error = %err,
                    "fundamentals fetch failed; skipping symbol"
                );
                SymbolOutcome::SkippedFetchFailure(format!("{err:#}"))
            }
        };

        match &outcome {
            SymbolOutcome::SkippedInsufficientData(why) => {
                tracing::debug!(symbol = %candidate.symbol, reason = %why, "missing fundamentals");
            }
            SymbolOutcome::Filtered(reason) => {
                tracing::debug!(
                    symbol = %candidate.symbol,
                    %reason,
                    "filtered in fundamentals phase"
                );
            }
            _ => {}
        }

        outcomes.push(SymbolStatus {
            symbol: candidate.symbol.clone(),
            outcome: outcome.status(),
        });
        if let Some(result) = outcome.included() {
            results.push(result);
        }
    }

    tracing::info!(
        candidates = candidates.len(),
        matched = results.len(),
        "fundamentals phase complete"
    );

    Enrichment { outcomes, results }
}
