//! Domain models for AWS region summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Cidr`] - network prefix in CIDR notation, IPv4 or IPv6
//! - [`NetworkPrefix`] - a CIDR block labeled with AWS region and service

mod cidr;
mod prefix;

// Re-export public types
pub use cidr::{v4_mask, v6_mask, Cidr, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use prefix::NetworkPrefix;
