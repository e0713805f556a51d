pub mod select;

pub use select::EnumSelect;
