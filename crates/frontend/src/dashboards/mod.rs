pub mod d400_chargeback_stats;

pub use d400_chargeback_stats::ui::ChargebackStatsDashboard;
