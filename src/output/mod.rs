//! Output formatting for host summaries.
//!
//! - [`report`] - per-address records, terminal summary and JSON block

mod report;

pub use report::{print_report, AddressReport};
