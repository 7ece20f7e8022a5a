//! Data model for the loaded lists

mod selector;
mod table;

pub use selector::ColumnSelector;
pub use table::{Column, Row, Table};
