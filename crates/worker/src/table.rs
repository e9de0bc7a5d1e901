use screener_core::domain::screen::ScreenResult;
use std::fmt::Write;

pub fn render_table(results: &[ScreenResult]) -> String {
    let scored = results.iter().any(|r| r.score.is_some());
    let name_width = results
        .iter()
        .map(|r| r.display_name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 32);

    let mut out = String::new();
    let _ = write!(
        out,
        "{:>3}  {:<10} {:<name_width$} {:>10} {:>8} {:>9} {:>7} {:>7}",
        "#", "Symbol", "Name", "Price", "Perf%", "52W-Dist%", "Div%", "PE"
    );
    if scored {
        let _ = write!(out, " {:>8}", "Score");
    }
    out.push('\n');

    for (i, r) in results.iter().enumerate() {
        let name: String = r.display_name.chars().take(name_width).collect();
        let _ = write!(
            out,
            "{:>3}  {:<10} {:<name_width$} {:>10.2} {:>8.2} {:>9.2} {:>7.2} {:>7.2}",
            i + 1,
            r.symbol,
            name,
            r.current_price,
            r.lookback_performance_pct,
            r.distance_from_high_pct,
            r.dividend_yield_pct,
            r.trailing_pe,
        );
        if scored {
            match r.score {
                Some(s) => {
                    let _ = write!(out, " {s:>8.2}");
                }
                None => {
                    let _ = write!(out, " {:>8}", "-");
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result(symbol: &str, score: Option<f64>) -> ScreenResult {
        ScreenResult {
            symbol: symbol.to_string(),
            display_name: "Deutsche Telekom".to_string(),
            current_price: 27.5,
            lookback_performance_pct: 4.25,
            distance_from_high_pct: -18.0,
            fifty_two_week_high: 33.54,
            fifty_two_week_high_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            trailing_pe: 13.1,
            dividend_yield_pct: 3.2,
            score,
        }
    }

    #[test]
    fn renders_header_and_one_line_per_result() {
        let table = render_table(&[result("DTE.DE", Some(7.123)), result("EOAN.DE", None)]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Symbol"));
        assert!(lines[0].ends_with("Score"));
        assert!(lines[1].contains("DTE.DE"));
        assert!(lines[1].ends_with("7.12"));
        assert!(lines[2].ends_with('-'));
    }

    #[test]
    fn omits_score_column_when_unscored() {
        let table = render_table(&[result("DTE.DE", None)]);
        assert!(!table.contains("Score"));
    }
}
