//! Integration tests for aws-region-summary
//!
//! These tests verify the complete workflow from reading a cached ranges
//! document to classifying addresses against it.

use aws_region_summary::aws::read_ranges_cache;
use aws_region_summary::config::Config;
use aws_region_summary::processing::{build_table, ParsePolicy};
use aws_region_summary::{classify, load_prefix_table};

const TEST_CACHE: &str = "src/tests/test_data/ip_ranges_test_01.json";

#[tokio::test]
async fn test_full_workflow_with_cache() {
    let config = Config::default();

    // Read from test cache
    let ranges = read_ranges_cache(Some(TEST_CACHE), &config)
        .await
        .expect("Failed to read ranges cache");
    assert_eq!(ranges.prefixes.len(), 5, "Expected 5 IPv4 entries in test data");
    assert_eq!(ranges.ipv6_prefixes.len(), 2, "Expected 2 IPv6 entries in test data");

    // Build table: the bad-cidr entry is dropped, everything else kept in order
    let table = build_table(ranges.raw_entries(), config.parse_policy)
        .expect("Failed to build prefix table");
    assert_eq!(table.len(), 6, "Expected 6 valid prefixes after skipping bad-cidr");

    // Exact match
    let matched = classify("52.94.0.1", &table).unwrap().expect("Should match");
    assert_eq!(matched.region, "us-east-1");
    assert_eq!(matched.service, "DYNAMODB");
    assert_eq!(matched.network.to_string(), "52.94.0.0/22");

    // Overlapping prefixes: first in table order wins, not the /16
    let matched = classify("10.0.1.1", &table).unwrap().expect("Should match");
    assert_eq!(matched.region, "us-east-1");
    assert_eq!(matched.network.to_string(), "10.0.0.0/8");

    // IPv6 match
    let matched = classify("2600:1f14::1", &table).unwrap().expect("Should match");
    assert_eq!(matched.region, "us-west-2");

    // No match is a normal result
    assert!(classify("192.0.2.1", &table).unwrap().is_none());
}

#[tokio::test]
async fn test_load_prefix_table_helper() {
    let table = load_prefix_table(Some(TEST_CACHE), &Config::default())
        .await
        .expect("Failed to load prefix table");
    assert_eq!(table.len(), 6);
}

#[tokio::test]
async fn test_strict_policy_rejects_test_cache() {
    let mut config = Config::default();
    config.parse_policy = ParsePolicy::Strict;

    let ranges = read_ranges_cache(Some(TEST_CACHE), &config)
        .await
        .expect("Failed to read ranges cache");
    let result = build_table(ranges.raw_entries(), config.parse_policy);
    assert!(result.is_err(), "Strict policy must reject the bad-cidr entry");
}

#[tokio::test]
async fn test_missing_cache_file_is_error() {
    let result = read_ranges_cache(Some("src/tests/test_data/no_such_file.json"), &Config::default()).await;
    assert!(result.is_err());
}
