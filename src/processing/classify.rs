//! Address-to-prefix classification.
//!
//! Pure lookup over an immutable [`PrefixTable`]: no I/O, no shared state,
//! safe to call from anywhere without synchronization.

use super::PrefixTable;
use crate::models::NetworkPrefix;
use std::net::IpAddr;
use thiserror::Error;

/// Errors from [`classify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The queried text is not a well-formed IP address. Distinct from
    /// "no matching prefix", which is a normal result, not an error.
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),
}

/// Classify a textual IP address against the table.
///
/// Returns `Ok(None)` when no prefix contains the address, and
/// [`ClassifyError::InvalidAddress`] when the text does not parse.
pub fn classify<'t>(
    addr: &str,
    table: &'t PrefixTable,
) -> Result<Option<&'t NetworkPrefix>, ClassifyError> {
    let ip: IpAddr = addr
        .trim()
        .parse()
        .map_err(|_| ClassifyError::InvalidAddress(addr.to_string()))?;
    Ok(classify_ip(ip, table))
}

/// Classify an already-parsed address against the table.
///
/// Linear scan in table order, first match wins. Overlapping prefixes
/// resolve to whichever appears first in the source dataset, NOT to the
/// most specific one; existing consumers of the published ranges rely on
/// this ordering, so it is kept as-is.
pub fn classify_ip(ip: IpAddr, table: &PrefixTable) -> Option<&NetworkPrefix> {
    table.iter().find(|p| p.network.contains(ip))
}
