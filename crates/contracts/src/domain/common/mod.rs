//! Common types shared by every record collection

pub mod draft;
pub mod record;
pub mod record_kind;
pub mod selection;
pub mod status_history;

// Re-exports
pub use draft::{DraftError, RecordDraft};
pub use record::{Record, RecordId};
pub use record_kind::RecordKind;
pub use selection::{SaveOutcome, SelectionState};
pub use status_history::{history_from_body, StatusHistoryEntry};
