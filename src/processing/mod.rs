//! Prefix table construction and address classification.
//!
//! This module contains the in-memory core of the tool:
//! - [`table`] - building the ordered prefix table from raw entries
//! - [`classify`] - matching addresses against the table

mod classify;
mod table;

// Re-export public functions
pub use classify::{classify, classify_ip, ClassifyError};
pub use table::{build_table, ParsePolicy, PrefixTable, RawEntry, TableError};
