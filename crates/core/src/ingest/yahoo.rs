use crate::domain::screen::FundamentalSnapshot;
use crate::ingest::error::ProviderError;
use crate::ingest::provider::MarketDataClient;
use crate::ingest::types::{PriceBar, PriceSeries};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate};
use std::fmt;
use ::time::OffsetDateTime;
use tokio::sync::Mutex;
use yahoo_finance_api as yahoo;

const PROVIDER: &str = "yahoo";

/// Yahoo Finance via `yahoo_finance_api`, which handles the cookie/crumb handshake
/// the quote summary endpoint requires.
pub struct YahooClient {
    // get_ticker_info refreshes the crumb and needs `&mut`.
    connector: Mutex<yahoo::YahooConnector>,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| anyhow::anyhow!("failed to create Yahoo Finance connector: {e}"))?;
        Ok(Self {
            connector: Mutex::new(connector),
        })
    }
}

#[async_trait::async_trait]
impl MarketDataClient for YahooClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let period_start = to_offset_datetime(start)?;
        // The end bound is exclusive.
        let period_end = to_offset_datetime(end.succ_opt().context("end date out of range")?)?;

        let response = {
            let connector = self.connector.lock().await;
            connector
                .get_quote_history_interval(symbol, period_start, period_end, "1d")
                .await
                .map_err(|e| provider_error("chart", symbol, e))?
        };
        let quotes = response
            .quotes()
            .map_err(|e| provider_error("chart", symbol, e))?;

        let bars = quotes
            .iter()
            .filter_map(|q| {
                let ts = q.timestamp as i64;
                price_bar(ts, q.open, q.high, q.low, q.close, q.volume)
            })
            .collect();

        Ok(PriceSeries::from_unsorted(symbol, bars))
    }

    async fn get_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot> {
        let summary = {
            let mut connector = self.connector.lock().await;
            connector
                .get_ticker_info(symbol)
                .await
                .map_err(|e| provider_error("quote_summary", symbol, e))?
        };

        let quote_summary = summary
            .quote_summary
            .ok_or_else(|| provider_error("quote_summary", symbol, "no quote summary"))?;
        let data = first_result("quote_summary", symbol, quote_summary.result)?;
        let detail = data.summary_detail.as_ref();

        Ok(fundamental_snapshot(
            detail.and_then(|sd| sd.trailing_pe),
            detail.and_then(|sd| sd.trailing_annual_dividend_yield),
        ))
    }
}

fn provider_error(stage: &'static str, symbol: &str, detail: impl fmt::Display) -> ProviderError {
    ProviderError::new(PROVIDER, stage, symbol, detail.to_string())
}

fn first_result<T>(stage: &'static str, symbol: &str, result: Option<Vec<T>>) -> Result<T> {
    result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| provider_error(stage, symbol, "empty result").into())
}

fn to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime> {
    let month = u8::try_from(date.month())
        .ok()
        .and_then(|m| ::time::Month::try_from(m).ok())
        .with_context(|| format!("invalid month in {date}"))?;
    let day = u8::try_from(date.day()).with_context(|| format!("invalid day in {date}"))?;
    let d = ::time::Date::from_calendar_date(date.year(), month, day)
        .with_context(|| format!("date out of range: {date}"))?;
    Ok(d.midnight().assume_utc())
}

/// Daily bar from one upstream quote; bad timestamps or non-finite prices are dropped.
fn price_bar(
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
) -> Option<PriceBar> {
    if ![open, high, low, close].iter().all(|v| v.is_finite()) {
        return None;
    }
    let date = DateTime::from_timestamp(timestamp, 0)?.date_naive();
    Some(PriceBar {
        date,
        open,
        high,
        low,
        close,
        volume,
    })
}

/// `trailingAnnualDividendYield` is a fraction; the snapshot carries percent.
fn fundamental_snapshot(
    trailing_pe: Option<f64>,
    trailing_annual_dividend_yield: Option<f64>,
) -> FundamentalSnapshot {
    FundamentalSnapshot {
        trailing_pe: trailing_pe.filter(|v| v.is_finite()),
        dividend_yield_pct: trailing_annual_dividend_yield
            .map(|f| f * 100.0)
            .filter(|v| v.is_finite()),
    }
}
