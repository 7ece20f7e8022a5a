//! listdiff - Set-difference reconciliation for columnar lists
//!
//! Compares one column of text values between two delimited files after
//! normalization (trim + uppercase) and reports the values exclusive to each
//! side. Aimed at manual reconciliation of two name/ID lists (e.g. payroll vs
//! attendance).

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use compare::{compare, ComparisonResult};
pub use config::Config;
pub use error::CompareError;
pub use model::{ColumnSelector, Table};
