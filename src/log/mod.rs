//! Extraction of unsupported-operator reports from driver logs.

pub mod classify;
pub mod parse;
pub mod row;

pub use parse::{MalformedLinePolicy, collect_unsupported_operators};
pub use row::UnsupportedOperatorRecord;
