//! Command line configuration.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;

/// Local directory and content service backing the mdview UI.
#[derive(Debug, Parser)]
#[command(name = "mdview-server", version, about)]
pub struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Directory listed when a request has no path parameter.
    /// Defaults to the current working directory.
    #[arg(long)]
    pub root: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}
