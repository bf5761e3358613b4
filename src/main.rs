use aws_region_summary::config::Config;
use aws_region_summary::output::print_report;
use aws_region_summary::processing::ParsePolicy;
use aws_region_summary::summarize_host;
use clap::Parser;
use log4rs;
use std::error::Error;

/// Map a hostname's addresses to AWS regions using the published IP ranges.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Hostname (or IP literal) to summarize.
    hostname: String,

    /// Read the ranges document from this cache file instead of the
    /// date-stamped default.
    #[arg(long)]
    cache: Option<String>,

    /// Skip the TCP connect probe.
    #[arg(long)]
    no_probe: bool,

    /// TCP port for the connect probe.
    #[arg(long)]
    port: Option<u16>,

    /// Fail on malformed entries in the ranges document instead of
    /// skipping them.
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if cli.no_probe {
        config.probe_enabled = false;
    }
    if let Some(port) = cli.port {
        config.probe_port = port;
    }
    if cli.strict {
        config.parse_policy = ParsePolicy::Strict;
    }

    let reports = summarize_host(&cli.hostname, cli.cache.as_deref(), &config).await?;
    print_report(&cli.hostname, &reports)?;

    Ok(())
}
