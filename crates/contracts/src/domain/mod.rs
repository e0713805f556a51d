pub mod a001_chargeback;
pub mod a002_delinquency;
pub mod common;
