mod dashboard;

pub use dashboard::ChargebackStatsDashboard;
