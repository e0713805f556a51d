use serde::{Deserialize, Serialize};

/// Response of `GET /api/dashboard/chargeback-stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargebackStats {
    #[serde(alias = "chargeback_status_summary", default)]
    pub status_summary: Vec<StatusSummaryRow>,
    #[serde(alias = "chargeback_time_windows")]
    pub time_windows: TimeWindows,
}

/// Active chargebacks in one status. Money and percentages are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSummaryRow {
    pub current_status: String,
    pub status_count: i64,
    pub total_value: String,
    pub percentage_of_total: String,
}

/// Activity within one rolling seven-day window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindowStats {
    pub new_items_count: i64,
    pub new_items_value: String,
    pub avg_days_to_pfs: f64,
    pub avg_days_for_pfs_complete: f64,
    pub passed_to_pfs: i64,
    pub completed_by_pfs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindows {
    #[serde(rename = "7d")]
    pub last_7_days: TimeWindowStats,
    #[serde(rename = "14d")]
    pub days_8_to_14: TimeWindowStats,
    #[serde(rename = "21d")]
    pub days_15_to_21: TimeWindowStats,
    #[serde(rename = "28d")]
    pub days_22_to_28: TimeWindowStats,
}

impl TimeWindows {
    /// Windows in display order with their column labels.
    pub fn labelled(&self) -> [(&'static str, &TimeWindowStats); 4] {
        [
            ("Last 7 Days", &self.last_7_days),
            ("8-14 Days Ago", &self.days_8_to_14),
            ("15-21 Days Ago", &self.days_15_to_21),
            ("22-28 Days Ago", &self.days_22_to_28),
        ]
    }
}
