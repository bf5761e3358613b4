//! Per-address report records and terminal/JSON output.

use colored::Colorize;
use serde::Serialize;
use std::error::Error;
use std::net::IpAddr;

/// One resolved address with its classification and probe results.
///
/// The region/service/network fields are null when no published prefix
/// contains the address; `tcp_ping_ms` is null when the probe failed or
/// was disabled.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddressReport {
    pub ip: IpAddr,
    pub aws_region: Option<String>,
    pub aws_service: Option<String>,
    pub aws_network: Option<String>,
    pub tcp_ping_ms: Option<f64>,
}

/// Print the per-address summary lines followed by the JSON report block.
pub fn print_report(hostname: &str, reports: &[AddressReport]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_report()");
    println!("{}", format!("===== {hostname} =====").bold());

    for r in reports {
        let region = match &r.aws_region {
            Some(region) => region.green(),
            None => "no match".yellow(),
        };
        let service = r.aws_service.as_deref().unwrap_or("-");
        let network = r.aws_network.as_deref().unwrap_or("-");
        let rtt = match r.tcp_ping_ms {
            Some(ms) => format!("{ms}ms"),
            None => "n/a".to_string(),
        };
        println!("{ip:>40}  {region:>14}  {service:<12} {network:<20} rtt={rtt}", ip = r.ip);
    }

    let json = serde_json::to_string_pretty(&reports)?;
    println!("{json}");

    Ok(())
}
