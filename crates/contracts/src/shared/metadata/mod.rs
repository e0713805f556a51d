//! Declarative column and field descriptions for record pages
//!
//! All tables are `'static` and selected per record kind, so pages never
//! build ad-hoc field lists.

pub mod column;
pub mod manifest;

// Re-exports
pub use column::{CellFormat, ColumnDescriptor};
pub use manifest::{FieldManifest, FieldSpec, ManifestSection, ValueType};
