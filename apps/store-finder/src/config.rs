//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sf_dataset::CsvOptions;

#[derive(Parser, Debug)]
#[command(name = "store-finder", version, about = "Find stores within a radius of a point")]
pub struct Cli {
    /// Store dataset: `store_id,store_name,latitude,longitude` per row.
    #[arg(long, env = "STORE_FINDER_STORES", default_value = "stores.csv", global = true)]
    pub stores: PathBuf,

    /// The dataset's first row is a header.
    #[arg(long, global = true)]
    pub has_headers: bool,

    /// Pre-filter candidates with an R-tree instead of scanning every store.
    #[arg(long, global = true)]
    pub index: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve `GET /nearest-stores` over HTTP.
    Serve {
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
    /// Run a single query and print the JSON outcome.
    Query {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, allow_hyphen_values = true)]
        radius_km: f64,
    },
}

/// Settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct FinderConfig {
    pub stores_path: PathBuf,
    pub csv:         CsvOptions,
    pub use_index:   bool,
}

impl FinderConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            stores_path: cli.stores.clone(),
            csv:         CsvOptions { has_headers: cli.has_headers },
            use_index:   cli.index,
        }
    }
}

/// Parse `host:port` into a bind address.
pub fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_subcommand_accepts_negative_coordinates() {
        let cli = Cli::parse_from([
            "store-finder", "--stores", "x.csv", "--index",
            "query", "--lat", "40.0", "--lon", "-75.0", "--radius-km", "1",
        ]);
        let cfg = FinderConfig::from_cli(&cli);
        assert_eq!(cfg.stores_path, PathBuf::from("x.csv"));
        assert!(cfg.use_index);
        assert!(!cfg.csv.has_headers);
        match cli.command {
            Command::Query { lat, lon, radius_km } => {
                assert_eq!((lat, lon, radius_km), (40.0, -75.0, 1.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bind_addr_parses() {
        assert_eq!(bind_addr("127.0.0.1", 5000).unwrap().port(), 5000);
        assert!(bind_addr("not a host", 1).is_err());
    }
}
