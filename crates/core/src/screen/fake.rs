use crate::domain::screen::FundamentalSnapshot;
use crate::ingest::provider::MarketDataClient;
use crate::ingest::types::{PriceBar, PriceSeries};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    History(String),
    Fundamentals(String),
}

/// In-memory market data that records every request.
#[derive(Debug, Default)]
pub struct FakeMarketData {
    histories: HashMap<String, Result<PriceSeries, String>>,
    fundamentals: HashMap<String, Result<FundamentalSnapshot, String>>,
    calls: Mutex<Vec<Call>>,
}

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// One bar per close, consecutive days from `base_date`, high equal to close.
pub fn series_from_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries {
        symbol: symbol.to_string(),
        bars: closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: base_date() + Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000,
            })
            .collect(),
    }
}

/// `len` bars rising linearly so that the last close is `perf_pct` above the close
/// `lookback` sessions earlier.
pub fn closes_with_performance(len: usize, lookback: usize, perf_pct: f64) -> Vec<f64> {
    let mut closes = vec![100.0; len];
    let start = len - 1 - lookback;
    let target = 100.0 * (1.0 + perf_pct / 100.0);
    for (i, c) in closes.iter_mut().enumerate().skip(start) {
        let t = (i - start) as f64 / lookback as f64;
        *c = 100.0 + (target - 100.0) * t;
    }
    closes
}

impl FakeMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.histories
            .insert(symbol.to_string(), Ok(series_from_closes(symbol, closes)));
        self
    }

    pub fn with_history_error(mut self, symbol: &str, err: &str) -> Self {
        self.histories
            .insert(symbol.to_string(), Err(err.to_string()));
        self
    }

    pub fn with_fundamentals(mut self, symbol: &str, pe: Option<f64>, div: Option<f64>) -> Self {
        self.fundamentals.insert(
            symbol.to_string(),
            Ok(FundamentalSnapshot {
                trailing_pe: pe,
                dividend_yield_pct: div,
            }),
        );
        self
    }

    pub fn with_fundamentals_error(mut self, symbol: &str, err: &str) -> Self {
        self.fundamentals
            .insert(symbol.to_string(), Err(err.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fundamentals_requested(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Fundamentals(s) => Some(s),
                Call::History(_) => None,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl MarketDataClient for FakeMarketData {
    fn provider_name(&self) -> &'static str {
        "fake"
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<PriceSeries> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::History(symbol.to_string()));
        match self.histories.get(symbol) {
            Some(Ok(series)) => Ok(series.clone()),
            Some(Err(e)) => Err(anyhow::anyhow!("{e}")),
            None => Ok(PriceSeries {
                symbol: symbol.to_string(),
                bars: Vec::new(),
            }),
        }
    }

    async fn get_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Fundamentals(symbol.to_string()));
        match self.fundamentals.get(symbol) {
            Some(Ok(snap)) => Ok(*snap),
            Some(Err(e)) => Err(anyhow::anyhow!("{e}")),
            None => Ok(FundamentalSnapshot::default()),
        }
    }
}
