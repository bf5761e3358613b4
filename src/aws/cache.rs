//! Cache management for the ranges document.
//!
//! The published document changes rarely; a date-stamped cache file avoids
//! re-downloading it on every run.

use super::ranges::{fetch_ip_ranges, IpRanges};
use crate::config::Config;
use chrono;
use std::error::Error;
use std::path::Path;

/// Read the ranges document from a cache file, or fetch it if the cache
/// doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses
///   a date-stamped default name in the working directory.
/// * `config` - Runtime configuration (ranges URL).
///
/// # Returns
/// * `Ok(IpRanges)` - The document from cache or from AWS
/// * `Err` - If a cache file was specified but doesn't exist, or the fetch fails
pub async fn read_ranges_cache(
    cache_file: Option<&str>,
    config: &Config,
) -> Result<IpRanges, Box<dyn Error>> {
    let today = chrono::Utc::now();

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!("aws_ip_ranges_{}.json", today.format("%Y-%m-%d")),
    };

    let ranges = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let ranges = fetch_ip_ranges(config).await?;

            let json = serde_json::to_string(&ranges)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            ranges
        }
    };

    Ok(ranges)
}
