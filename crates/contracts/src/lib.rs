//! Shared data contracts for the CDMS dashboard.
//!
//! Everything here is platform independent: the WASM frontend uses it to
//! describe records, build requests and shape API responses for display.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
