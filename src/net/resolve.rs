//! Hostname resolution.

use std::error::Error;
use std::net::{IpAddr, ToSocketAddrs};

/// Resolve a hostname to its IP addresses.
///
/// Returns the resolver's answer order with duplicates removed (the system
/// resolver repeats addresses per socket type). Resolution failure or an
/// empty answer is an error; nothing downstream can run without addresses.
pub fn resolve_host(hostname: &str) -> Result<Vec<IpAddr>, Box<dyn Error>> {
    let addrs = (hostname, 0u16)
        .to_socket_addrs()
        .map_err(|e| format!("Could not resolve hostname {hostname}: {e}"))?;

    let mut ips: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        if !ips.contains(&addr.ip()) {
            ips.push(addr.ip());
        }
    }

    if ips.is_empty() {
        return Err(format!("Hostname {hostname} resolved to no addresses").into());
    }

    log::info!("{hostname} resolves to {ips:?}");
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ip_literal() {
        // IP literals resolve to themselves without touching DNS
        let ips = resolve_host("127.0.0.1").expect("literal should resolve");
        assert_eq!(ips, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[test]
    fn test_resolve_bad_hostname() {
        assert!(resolve_host("no-such-host.invalid").is_err());
    }
}
