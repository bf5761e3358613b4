// cargo watch -x 'fmt' -x 'run'  // 'run -- <hostname>'

pub mod aws;
pub mod config;
pub mod models;
pub mod net;
pub mod output;
pub mod processing;

use config::Config;
use output::AddressReport;
use processing::PrefixTable;
use std::error::Error;

pub use processing::{build_table, classify, classify_ip};

/// Load the ranges document (cache or download) and build the prefix table.
pub async fn load_prefix_table(
    cache_file: Option<&str>,
    config: &Config,
) -> Result<PrefixTable, Box<dyn Error>> {
    let ranges = aws::read_ranges_cache(cache_file, config).await?;
    let table = build_table(ranges.raw_entries(), config.parse_policy)?;
    Ok(table)
}

/// Resolve a hostname, classify each address against the table, and
/// optionally probe each address over TCP.
pub async fn summarize_host(
    hostname: &str,
    cache_file: Option<&str>,
    config: &Config,
) -> Result<Vec<AddressReport>, Box<dyn Error>> {
    let ips = net::resolve_host(hostname)?;
    let table = load_prefix_table(cache_file, config).await?;

    let mut reports = Vec::with_capacity(ips.len());
    for ip in ips {
        let matched = classify_ip(ip, &table);
        match matched {
            Some(p) => log::info!("{ip} -> {p}"),
            None => log::info!("{ip} -> no matching prefix"),
        }

        let tcp_ping_ms = if config.probe_enabled {
            net::tcp_ping(ip, config.probe_port, config.probe_timeout).await
        } else {
            None
        };

        reports.push(AddressReport {
            ip,
            aws_region: matched.map(|p| p.region.clone()),
            aws_service: matched.map(|p| p.service.clone()),
            aws_network: matched.map(|p| p.network.to_string()),
            tcp_ping_ms,
        });
    }

    Ok(reports)
}
