use crate::domain::configuration::{ResultOrdering, ScreenConfiguration};
use crate::domain::screen::ScreenResult;
use crate::ingest::provider::MarketDataClient;
use crate::screen::fundamentals::{enrich_fundamentals, EnrichParams, Enrichment};
use crate::screen::outcome::tally;
use crate::screen::performance::{scan_performance, PerformanceScan, ScanParams};
use crate::screen::scoring::rank_by_score;
use crate::screen::universe::build_universe;
use crate::time::window::HistoryWindow;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct ScreenReport {
    pub as_of_date: NaiveDate,
    pub window: HistoryWindow,
    pub universe_size: usize,
    pub scan: PerformanceScan,
    pub enrichment: Enrichment,
    /// Final ordered output.
    pub results: Vec<ScreenResult>,
}

impl ScreenReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn summary(&self) -> String {
        let (passed, filtered, insufficient, failed) = tally(&self.scan.outcomes);
        let (_, fundamentals_filtered, fundamentals_missing, fundamentals_failed) =
            tally(&self.enrichment.outcomes);
        format!(
            "scanned {} symbols: {} passed price filters \
             ({} filtered, {} insufficient history, {} fetch failures), \
             {} cut by top-K, {} enriched \
             ({} filtered, {} missing P/E, {} fetch failures), {} matched",
            self.universe_size,
            passed,
            filtered,
            insufficient,
            failed,
            self.scan.truncated.len(),
            self.enrichment.outcomes.len(),
            fundamentals_filtered,
            fundamentals_missing,
            fundamentals_failed,
            self.results.len(),
        )
    }
}

/// Universe → price scan → top-K → fundamentals, for one immutable configuration.
pub async fn run_screen(
    client: &dyn MarketDataClient,
    cfg: &ScreenConfiguration,
    as_of_date: NaiveDate,
    progress_every: usize,
) -> anyhow::Result<ScreenReport> {
    cfg.validate()?;

    let universe = build_universe(&cfg.selected_indices);
    let window = HistoryWindow::trailing(as_of_date, cfg.history_window_days)?;

    tracing::info!(
        %as_of_date,
        provider = client.provider_name(),
        indices = ?cfg.selected_indices,
        universe_len = universe.len(),
        start = %window.start,
        end = %window.end,
        "starting screen"
    );

    let scan = scan_performance(
        client,
        &universe,
        &ScanParams::from(cfg),
        window,
        progress_every,
    )
    .await;

    let enrichment = enrich_fundamentals(client, &scan.candidates, &EnrichParams::from(cfg)).await;

    let mut results = enrichment.results.clone();
    if cfg.ordering == ResultOrdering::Score {
        rank_by_score(&mut results);
    }

    let report = ScreenReport {
        as_of_date,
        window,
        universe_size: universe.len(),
        scan,
        enrichment,
        results,
    };
    tracing::info!(summary = %report.summary(), "screen complete");
    Ok(report)
}
