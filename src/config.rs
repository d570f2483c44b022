//! Command line and environment configuration for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use url::Url;

/// The default address of the categorization service.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// The web front end for the ExpenseFlow categorization service.
///
/// Every option can also be set with the environment variable named next to it.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the categorization service.
    #[arg(long, env = "EXPENSEFLOW_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// The address to listen on.
    #[arg(long, env = "EXPENSEFLOW_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, env = "EXPENSEFLOW_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
