//! Reset command implementation.

use anyhow::{Context, Result};
use clap::Args;

use libros_core::ClientConfig;
use libros_core::traits::ConfigStore;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ResetArgs {}

pub async fn run(_args: ResetArgs) -> Result<()> {
    let store = storage::open_store()?;
    store
        .reset_config()
        .await
        .context("Failed to reset configuration")?;

    let config = ClientConfig::default();
    output::success("Configuration reset to defaults");
    output::field("Catalog", config.root_url()?.as_str());
    output::field("Identity", config.identity_url().as_str());
    Ok(())
}
