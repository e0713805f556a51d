pub mod api_error;
pub mod format;
pub mod metadata;
pub mod paging;
