//! store-finder — nearest-store radius queries over a CSV dataset.
//!
//! ```text
//! store-finder --stores data/stores.csv --index serve --port 5000
//! store-finder --stores data/stores.csv query --lat 30.69 --lon -88.04 --radius-km 10
//! ```
//!
//! The dataset is loaded once at startup and shared read-only by every
//! request.  Log verbosity follows `RUST_LOG` (default `info`).

mod config;
mod server;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sf_core::GeoPoint;
use sf_dataset::load_stores_csv;
use sf_query::StoreCatalog;

use config::{bind_addr, Cli, Command, FinderConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FinderConfig::from_cli(&cli);
    let catalog = load_catalog(&config)?;

    match cli.command {
        Command::Serve { host, port } => serve(catalog, &host, port),
        Command::Query { lat, lon, radius_km } => {
            let outcome = catalog.query(GeoPoint::new(lat, lon), radius_km)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
    }
}

fn load_catalog(config: &FinderConfig) -> Result<StoreCatalog> {
    let t0 = Instant::now();
    let stores = load_stores_csv(&config.stores_path, &config.csv)
        .with_context(|| format!("loading stores from {}", config.stores_path.display()))?;

    let catalog = if config.use_index {
        StoreCatalog::new(stores).with_index()
    } else {
        StoreCatalog::new(stores)
    };

    info!(
        stores = catalog.len(),
        indexed = catalog.is_indexed(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "loaded {}",
        config.stores_path.display()
    );
    Ok(catalog)
}

fn serve(catalog: StoreCatalog, host: &str, port: u16) -> Result<()> {
    let addr = bind_addr(host, port)?;
    let app = server::router(Arc::new(catalog));

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        info!(%addr, "listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutting down");
            })
            .await
            .context("serving HTTP")
    })
}
