use crate::domain::screen::ScreenResult;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

const BASE_HEADER: [&str; 9] = [
    "Symbol",
    "Name",
    "Price",
    "Performance%",
    "DistanceFrom52WHigh%",
    "52WHigh",
    "52WHighDate",
    "DividendYield%",
    "PE",
];

/// The Score column is only emitted when at least one result carries a score.
pub fn write_results<W: Write>(writer: W, results: &[ScreenResult]) -> anyhow::Result<()> {
    let scored = results.iter().any(|r| r.score.is_some());
    let mut wtr = ::csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = BASE_HEADER.to_vec();
    if scored {
        header.push("Score");
    }
    wtr.write_record(&header)
        .context("failed to write CSV header")?;

    for r in results {
        let mut record = vec![
            r.symbol.clone(),
            r.display_name.clone(),
            fmt2(r.current_price),
            fmt2(r.lookback_performance_pct),
            fmt2(r.distance_from_high_pct),
            fmt2(r.fifty_two_week_high),
            r.fifty_two_week_high_date.format("%Y-%m-%d").to_string(),
            fmt2(r.dividend_yield_pct),
            fmt2(r.trailing_pe),
        ];
        if scored {
            record.push(r.score.map(fmt2).unwrap_or_default());
        }
        wtr.write_record(&record)
            .with_context(|| format!("failed to write CSV record for {}", r.symbol))?;
    }

    wtr.flush().context("failed to flush CSV writer")?;
    Ok(())
}

pub fn write_results_to_path(path: &Path, results: &[ScreenResult]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create CSV file: {}", path.display()))?;
    write_results(std::io::BufWriter::new(file), results)
}

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result(symbol: &str, name: &str, score: Option<f64>) -> ScreenResult {
        ScreenResult {
            symbol: symbol.to_string(),
            display_name: name.to_string(),
            current_price: 123.456,
            lookback_performance_pct: 7.891,
            distance_from_high_pct: -12.346,
            fifty_two_week_high: 140.0,
            fifty_two_week_high_date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
            trailing_pe: 14.2,
            dividend_yield_pct: 0.0,
            score,
        }
    }

    fn render(results: &[ScreenResult]) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, results).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_rounded_rows_without_score_column() {
        let out = render(&[result("SAP.DE", "SAP", None)]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Symbol,Name,Price,Performance%,DistanceFrom52WHigh%,\
             52WHigh,52WHighDate,DividendYield%,PE"
        );
        assert_eq!(lines[1], "SAP.DE,SAP,123.46,7.89,-12.35,140.00,2026-02-11,0.00,14.20");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn adds_score_column_and_quotes_names() {
        let out = render(&[
            result("JNJ", "Johnson & Johnson, Inc.", Some(3.14159)),
            result("KO", "Coca-Cola", None),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].ends_with(",PE,Score"));
        assert!(lines[1].starts_with("JNJ,\"Johnson & Johnson, Inc.\","));
        assert!(lines[1].ends_with(",3.14"));
        assert!(lines[2].ends_with(",14.20,"));
    }

    #[test]
    fn empty_results_still_write_header() {
        let out = render(&[]);
        assert_eq!(out.lines().count(), 1);
    }
}
