//! Prefix table construction.
//!
//! Builds an ordered, read-only table of labeled prefixes from the raw
//! entries of a ranges document. The source dataset is externally
//! controlled, so a malformed entry must not abort the whole build.

use crate::models::{Cidr, NetworkPrefix};
use thiserror::Error;

/// How to treat raw entries whose CIDR text does not parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip malformed entries and keep building (default, matches the
    /// published-dataset consumers this tool has to agree with).
    #[default]
    Lenient,
    /// Abort on the first malformed entry.
    Strict,
}

/// Errors from [`build_table`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed prefix entry: {cidr:?} ({region}/{service})")]
    MalformedPrefixEntry {
        cidr: String,
        region: String,
        service: String,
    },
}

/// One raw entry from the ranges document, not yet parsed.
#[derive(Debug, Copy, Clone)]
pub struct RawEntry<'a> {
    pub cidr: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// An ordered sequence of labeled prefixes, read-only after construction.
#[derive(Debug, Default, Clone)]
pub struct PrefixTable {
    prefixes: Vec<NetworkPrefix>,
}

impl PrefixTable {
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate prefixes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, NetworkPrefix> {
        self.prefixes.iter()
    }
}

/// Build a [`PrefixTable`] from raw entries, preserving input order.
///
/// With [`ParsePolicy::Lenient`] an entry with unparseable CIDR text is
/// dropped (logged at debug level) and construction continues. With
/// [`ParsePolicy::Strict`] the first such entry aborts with
/// [`TableError::MalformedPrefixEntry`].
pub fn build_table<'a, I>(entries: I, policy: ParsePolicy) -> Result<PrefixTable, TableError>
where
    I: IntoIterator<Item = RawEntry<'a>>,
{
    let mut prefixes = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let network = match Cidr::new(entry.cidr) {
            Ok(net) => net,
            Err(e) => {
                if policy == ParsePolicy::Strict {
                    return Err(TableError::MalformedPrefixEntry {
                        cidr: entry.cidr.to_string(),
                        region: entry.region.to_string(),
                        service: entry.service.to_string(),
                    });
                }
                log::debug!("Skipping malformed prefix entry {:?}: {e}", entry.cidr);
                skipped += 1;
                continue;
            }
        };
        prefixes.push(NetworkPrefix {
            network,
            region: entry.region.to_string(),
            service: entry.service.to_string(),
        });
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed prefix entries while building table");
    }
    log::info!("Built prefix table with {} entries", prefixes.len());

    Ok(PrefixTable { prefixes })
}
