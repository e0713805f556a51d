//! Generic list / edit / history flow shared by every record collection.

pub mod api;
pub mod details;
pub mod list;
