//! ProcureX
//!
//! Desktop procurement console for products, vendors and growth metrics.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use procurex_core::ConsoleConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ConsoleConfig::load().context("Failed to load configuration")?;
    tracing::debug!("Configuration: {:?}", config);

    // Launch the Dioxus desktop application
    procurex_ui::launch(&config).context("Failed to start ProcureX")?;

    Ok(())
}
