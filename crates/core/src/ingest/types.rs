use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Daily bars for one symbol, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Sorts bars by date and keeps the first bar of any duplicated date.
    pub fn from_unsorted(symbol: &str, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Self {
            symbol: symbol.to_string(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Close `sessions` bars before the most recent one.
    pub fn close_sessions_ago(&self, sessions: usize) -> Option<f64> {
        let idx = self.bars.len().checked_sub(sessions.checked_add(1)?)?;
        self.bars.get(idx).map(|b| b.close)
    }

    /// Highest high across the series; the earliest bar wins ties.
    pub fn max_high(&self) -> Option<(f64, NaiveDate)> {
        let mut best: Option<(f64, NaiveDate)> = None;
        for bar in &self.bars {
            match best {
                Some((high, _)) if bar.high <= high => {}
                _ => best = Some((bar.high, bar.date)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64, high: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            open: close,
            high,
            low: close,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn from_unsorted_orders_and_dedups_by_date() {
        let s = PriceSeries::from_unsorted(
            "AAA",
            vec![bar(4, 12.0, 12.0), bar(2, 10.0, 10.0), bar(4, 99.0, 99.0)],
        );
        assert_eq!(s.symbol, "AAA");
        assert_eq!(s.len(), 2);
        assert_eq!(s.bars[0].close, 10.0);
        assert_eq!(s.last_close(), Some(12.0));
    }

    #[test]
    fn close_sessions_ago_counts_trading_bars() {
        let s = PriceSeries {
            symbol: "AAA".to_string(),
            bars: vec![bar(2, 10.0, 10.0), bar(3, 11.0, 11.0), bar(4, 12.0, 12.0)],
        };
        assert_eq!(s.last_close(), Some(12.0));
        assert_eq!(s.close_sessions_ago(0), Some(12.0));
        assert_eq!(s.close_sessions_ago(2), Some(10.0));
        assert_eq!(s.close_sessions_ago(3), None);
    }

    #[test]
    fn max_high_keeps_first_occurrence() {
        let s = PriceSeries {
            symbol: "AAA".to_string(),
            bars: vec![bar(2, 10.0, 15.0), bar(3, 11.0, 15.0), bar(4, 12.0, 13.0)],
        };
        let (high, date) = s.max_high().unwrap();
        assert_eq!(high, 15.0);
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(PriceSeries::default().max_high(), None);
    }
}
