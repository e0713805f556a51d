pub mod dto;
pub mod report;

pub use dto::{ChargebackStats, StatusSummaryRow, TimeWindowStats, TimeWindows};
pub use report::{status_summary_table, status_totals, trends_table, ReportTable, StatusTotals};
