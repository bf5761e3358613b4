//! AWS published IP ranges document.
//!
//! Handles downloading and deserializing `ip-ranges.json`.

use crate::config::{Config, FETCH_TIMEOUT_SECS};
use crate::processing::RawEntry;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

/// The `ip-ranges.json` document as published by AWS.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct IpRanges {
    #[serde(rename = "syncToken", default)]
    pub sync_token: String,
    #[serde(rename = "createDate", default)]
    pub create_date: String,
    /// IPv4 ranges.
    #[serde(default)]
    pub prefixes: Vec<RawPrefix>,
    /// IPv6 ranges.
    #[serde(default)]
    pub ipv6_prefixes: Vec<RawIpv6Prefix>,
}

/// One IPv4 entry, CIDR text kept as-is until table construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawPrefix {
    pub ip_prefix: String,
    pub region: String,
    pub service: String,
    #[serde(default)]
    pub network_border_group: String,
}

/// One IPv6 entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawIpv6Prefix {
    pub ipv6_prefix: String,
    pub region: String,
    pub service: String,
    #[serde(default)]
    pub network_border_group: String,
}

impl IpRanges {
    /// All entries, IPv4 first then IPv6, in document order within each
    /// family, ready for table construction.
    pub fn raw_entries(&self) -> impl Iterator<Item = RawEntry<'_>> {
        let v4 = self.prefixes.iter().map(|p| RawEntry {
            cidr: p.ip_prefix.as_str(),
            region: p.region.as_str(),
            service: p.service.as_str(),
        });
        let v6 = self.ipv6_prefixes.iter().map(|p| RawEntry {
            cidr: p.ipv6_prefix.as_str(),
            region: p.region.as_str(),
            service: p.service.as_str(),
        });
        v4.chain(v6)
    }
}

/// Download and parse the ranges document.
///
/// # Returns
/// * `Ok(IpRanges)` - The parsed document
/// * `Err` - On transport failure, non-2xx status, or schema mismatch
pub async fn fetch_ip_ranges(config: &Config) -> Result<IpRanges, Box<dyn Error>> {
    log::info!("Downloading AWS IP ranges from {}", config.ranges_url);

    let body = reqwest::Client::new()
        .get(&config.ranges_url)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .send()
        .await
        .map_err(|e| format!("Error downloading AWS IP ranges: {e}"))?
        .error_for_status()
        .map_err(|e| format!("AWS IP ranges request failed: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Error reading AWS IP ranges body: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&body);
    let ranges: IpRanges = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing ip-ranges JSON: path={} error={}", e.path(), e))?;

    log::info!(
        "Got {} IPv4 and {} IPv6 prefixes (syncToken={}, createDate={})",
        ranges.prefixes.len(),
        ranges.ipv6_prefixes.len(),
        ranges.sync_token,
        ranges.create_date
    );

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ranges_document() {
        let json = r#"{
            "syncToken": "1693870000",
            "createDate": "2023-09-04-22-41-13",
            "prefixes": [
                {"ip_prefix": "52.94.0.0/22", "region": "us-east-1", "service": "DYNAMODB", "network_border_group": "us-east-1"}
            ],
            "ipv6_prefixes": [
                {"ipv6_prefix": "2600:1f14::/35", "region": "us-west-2", "service": "AMAZON", "network_border_group": "us-west-2"}
            ]
        }"#;
        let ranges: IpRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.sync_token, "1693870000");
        assert_eq!(ranges.prefixes.len(), 1);
        assert_eq!(ranges.ipv6_prefixes.len(), 1);
        assert_eq!(ranges.prefixes[0].service, "DYNAMODB");
    }

    #[test]
    fn test_raw_entries_order_v4_then_v6() {
        let ranges = IpRanges {
            prefixes: vec![RawPrefix {
                ip_prefix: "52.94.0.0/22".to_string(),
                region: "us-east-1".to_string(),
                service: "DYNAMODB".to_string(),
                network_border_group: String::new(),
            }],
            ipv6_prefixes: vec![RawIpv6Prefix {
                ipv6_prefix: "2600:1f14::/35".to_string(),
                region: "us-west-2".to_string(),
                service: "AMAZON".to_string(),
                network_border_group: String::new(),
            }],
            ..Default::default()
        };
        let entries: Vec<_> = ranges.raw_entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].cidr, "52.94.0.0/22");
        assert_eq!(entries[1].cidr, "2600:1f14::/35");
    }

    #[test]
    fn test_parse_missing_optional_sections() {
        // a document without ipv6_prefixes must still parse
        let json = r#"{"prefixes": [{"ip_prefix": "10.0.0.0/8", "region": "r", "service": "s"}]}"#;
        let ranges: IpRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.prefixes.len(), 1);
        assert!(ranges.ipv6_prefixes.is_empty());
        assert_eq!(ranges.prefixes[0].network_border_group, "");
    }
}
