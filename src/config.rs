//! Runtime configuration.
//!
//! Built once in `main` from the process environment (after dotenv) and
//! passed down explicitly, so the loader and classifier stay testable
//! without ambient state.

use crate::processing::ParsePolicy;
use std::time::Duration;

/// Published AWS IP ranges document.
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/// Default TCP port for the connect probe (FIX endpoints sit behind TLS).
pub const DEFAULT_PROBE_PORT: u16 = 443;

/// Default timeout for one TCP connect probe, seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Timeout for downloading the ranges document, seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the ip-ranges JSON document.
    pub ranges_url: String,
    /// TCP port used by the connect probe.
    pub probe_port: u16,
    /// Timeout for one connect probe.
    pub probe_timeout: Duration,
    /// Whether to run the connect probe at all.
    pub probe_enabled: bool,
    /// How to treat malformed entries in the ranges document.
    pub parse_policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ranges_url: AWS_IP_RANGES_URL.to_string(),
            probe_port: DEFAULT_PROBE_PORT,
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            probe_enabled: true,
            parse_policy: ParsePolicy::Lenient,
        }
    }
}

impl Config {
    /// Build a [`Config`] from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `AWS_IP_RANGES_URL`, `PROBE_TCP_PORT`,
    /// `PROBE_TIMEOUT_SECS`.
    pub fn from_env() -> Config {
        let mut config = Config::default();
        if let Ok(url) = std::env::var("AWS_IP_RANGES_URL") {
            config.ranges_url = url;
        }
        if let Some(port) = std::env::var("PROBE_TCP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.probe_port = port;
        }
        if let Some(secs) = std::env::var("PROBE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.probe_timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ranges_url, AWS_IP_RANGES_URL);
        assert_eq!(config.probe_port, 443);
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert!(config.probe_enabled);
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
    }
}
