//! AWS published-ranges interaction.
//!
//! This module handles all AWS-related operations:
//! - [`ranges`] - downloading and deserializing ip-ranges.json
//! - [`cache`] - caching of the ranges document

mod cache;
mod ranges;

// Re-export public types and functions
pub use cache::read_ranges_cache;
pub use ranges::{fetch_ip_ranges, IpRanges, RawIpv6Prefix, RawPrefix};
