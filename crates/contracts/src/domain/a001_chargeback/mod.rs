pub mod metadata;

pub use metadata::{COLUMNS, MANIFEST};
