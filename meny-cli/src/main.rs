//! Command-line front end for meny that crawls supplier school catalogs.

mod cli;
mod output;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use meny_core::{model::SupplierId, plugin::PluginRegistry, service::MenyService};
use meny_provider_skolmaten as skolmaten;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // HTTP + service setup
    let plugins = vec![
        skolmaten::plugin_from_config(&cli.skolmaten_config())
            .context("failed to set up the Skolmaten provider")?,
    ];
    let registry = Arc::new(PluginRegistry::new(plugins));
    let service = MenyService::new(registry);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Suppliers => output::write_suppliers(&mut out, &service.suppliers())?,
        Commands::Schools { supplier, format } => {
            let supplier = SupplierId::from(supplier);
            info!(%supplier, "crawling school catalog");

            let schools = service
                .list_schools(&supplier)
                .await
                .with_context(|| format!("failed to list schools for supplier {supplier}"))?;

            output::write_schools(&mut out, &schools, format)?;
        }
    }

    out.flush()?;
    Ok(())
}
