//! Turns server-computed chargeback statistics into display tables.
//!
//! Nothing is averaged or recomputed here; the only arithmetic is the
//! synthesized `Total` row of the status summary.

use super::dto::{ChargebackStats, TimeWindowStats};
use crate::shared::format::{
    format_currency, format_decimal, format_percent, format_thousands, parse_amount,
};

/// Static table: header row plus text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusTotals {
    pub count: i64,
    pub value: f64,
}

/// Sum of counts and values over all status rows. Unparseable values count as zero.
pub fn status_totals(stats: &ChargebackStats) -> StatusTotals {
    stats
        .status_summary
        .iter()
        .fold(StatusTotals { count: 0, value: 0.0 }, |acc, row| StatusTotals {
            count: acc.count + row.status_count,
            value: acc.value + parse_amount(&row.total_value).unwrap_or(0.0),
        })
}

pub fn status_summary_table(stats: &ChargebackStats) -> ReportTable {
    let mut rows: Vec<Vec<String>> = stats
        .status_summary
        .iter()
        .map(|s| {
            vec![
                s.current_status.clone(),
                format_thousands(s.status_count),
                format_currency(parse_amount(&s.total_value).unwrap_or(0.0)),
                format_percent(&s.percentage_of_total),
            ]
        })
        .collect();

    let totals = status_totals(stats);
    rows.push(vec![
        "Total".to_string(),
        format_thousands(totals.count),
        format_currency(totals.value),
        "100%".to_string(),
    ]);

    ReportTable {
        title: "Active Chargebacks by Status",
        headers: ["Status", "Count", "Total Value", "% of Total"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows,
    }
}

pub fn trends_table(stats: &ChargebackStats) -> ReportTable {
    let windows = stats.time_windows.labelled();

    let mut headers = vec!["Metric".to_string()];
    headers.extend(windows.iter().map(|(label, _)| label.to_string()));

    let metric = |name: &str, cell: fn(&TimeWindowStats) -> String| {
        let mut row = vec![name.to_string()];
        row.extend(windows.iter().map(|(_, w)| cell(w)));
        row
    };

    let rows = vec![
        metric("New Items", |w| format_thousands(w.new_items_count)),
        metric("Value of New Items", |w| {
            format_currency(parse_amount(&w.new_items_value).unwrap_or(0.0))
        }),
        metric("Passed to PFS", |w| format_thousands(w.passed_to_pfs)),
        metric("Completed by PFS", |w| format_thousands(w.completed_by_pfs)),
        metric("Avg Days to PFS", |w| format_decimal(w.avg_days_to_pfs, 2)),
        metric("Avg PFS Completion", |w| {
            format_decimal(w.avg_days_for_pfs_complete, 2)
        }),
    ];

    ReportTable {
        title: "Chargeback Trends",
        headers,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn window(n: i64) -> serde_json::Value {
        json!({
            "new_items_count": n * 1000,
            "new_items_value": format!("{}.5", n * 100),
            "avg_days_to_pfs": 3.456,
            "avg_days_for_pfs_complete": 10.0,
            "passed_to_pfs": n,
            "completed_by_pfs": n - 1
        })
    }

    fn stats() -> ChargebackStats {
        serde_json::from_value(json!({
            "status_summary": [
                {"current_status": "Open", "status_count": 10, "total_value": "100", "percentage_of_total": "66.67"},
                {"current_status": "Closed", "status_count": 5, "total_value": "50", "percentage_of_total": "33.33"}
            ],
            "time_windows": {"7d": window(1), "14d": window(2), "21d": window(3), "28d": window(4)}
        }))
        .unwrap()
    }

    #[test]
    fn total_row_sums_counts_and_values() {
        let stats = stats();
        assert_eq!(status_totals(&stats), StatusTotals { count: 15, value: 150.0 });

        let table = status_summary_table(&stats);
        assert_eq!(table.headers, vec!["Status", "Count", "Total Value", "% of Total"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["Open", "10", "$100.00", "66.67%"]);
        assert_eq!(table.rows[2], vec!["Total", "15", "$150.00", "100%"]);
    }

    #[test]
    fn empty_summary_still_has_total_row() {
        let mut stats = stats();
        stats.status_summary.clear();
        let table = status_summary_table(&stats);
        assert_eq!(table.rows, vec![vec!["Total", "0", "$0.00", "100%"]]);
    }

    #[test]
    fn trends_table_has_one_column_per_window() {
        let table = trends_table(&stats());
        assert_eq!(
            table.headers,
            vec!["Metric", "Last 7 Days", "8-14 Days Ago", "15-21 Days Ago", "22-28 Days Ago"]
        );
        assert_eq!(table.rows[0], vec!["New Items", "1,000", "2,000", "3,000", "4,000"]);
        assert_eq!(table.rows[1][4], "$400.50");
        assert_eq!(table.rows[3][1], "0");
        assert_eq!(table.rows[4][1], "3.46");
        assert_eq!(table.rows[5][1], "10.00");
    }

    #[test]
    fn accepts_server_prefixed_keys() {
        let stats: ChargebackStats = serde_json::from_value(json!({
            "chargeback_status_summary": [],
            "chargeback_time_windows": {"7d": window(1), "14d": window(1), "21d": window(1), "28d": window(1)}
        }))
        .unwrap();
        assert!(stats.status_summary.is_empty());
        assert_eq!(stats.time_windows.last_7_days.passed_to_pfs, 1);
    }
}
