use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Calendar date range requested from the price-history source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryWindow {
    /// Trailing `days` calendar days ending at `as_of_date` (inclusive).
    pub fn trailing(as_of_date: NaiveDate, days: i64) -> anyhow::Result<Self> {
        let start = Duration::try_days(days)
            .and_then(|d| as_of_date.checked_sub_signed(d))
            .with_context(|| {
                format!("history window of {days} days before {as_of_date} is out of range")
            })?;
        Ok(Self {
            start,
            end: as_of_date,
        })
    }
}

pub fn resolve_as_of_date(
    as_of_date_arg: Option<&str>,
    now_utc: DateTime<Utc>,
) -> anyhow::Result<NaiveDate> {
    if let Some(s) = as_of_date_arg {
        return NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid as-of date (expected YYYY-MM-DD): {s}"));
    }

    // Markets close at different times across the supported indices; the provider simply
    // returns whatever sessions exist up to today.
    Ok(now_utc.date_naive())
}
