use crate::domain::screen::FundamentalSnapshot;
use crate::ingest::types::PriceSeries;
use anyhow::Result;
use chrono::NaiveDate;

/// Upstream market data source used by both screening phases.
///
/// Implementations must not retry on their own: a failed call is reported once and the
/// screener drops the symbol for the current run.
#[async_trait::async_trait]
pub trait MarketDataClient: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Daily bars for `symbol` between `start` and `end` (inclusive), ascending by date.
    /// Fewer rows than requested is not an error.
    async fn get_price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;

    async fn get_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot>;
}
