//! Bearer-token session against the external identity provider.

pub mod context;
pub mod guard;
pub mod storage;
