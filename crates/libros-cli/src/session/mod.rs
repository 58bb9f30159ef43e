//! Per-invocation client wiring.

pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use tracing::debug;

use libros_core::ClientConfig;
use libros_file::FileStore;
use libros_http::LibrosClient;

use crate::output;

/// Everything a command needs: the stored state and a client built from it.
pub struct CliContext {
    pub store: Arc<FileStore>,
    pub config: ClientConfig,
    pub client: LibrosClient,
}

impl CliContext {
    /// Load the stored configuration (or defaults) and build the client.
    pub async fn load() -> Result<Self> {
        let store = Arc::new(storage::open_store()?);
        debug!(path = %store.path().display(), "Using state file");
        let config = ClientConfig::load_or_default(store.as_ref())
            .await
            .context("Failed to load configuration")?;
        let client = LibrosClient::new(config.clone(), store.clone())
            .context("Failed to create HTTP client")?;

        Ok(Self {
            store,
            config,
            client,
        })
    }

    /// Recover the stored session, failing when the user has to log in.
    pub async fn require_session(&self) -> Result<()> {
        eprintln!("{}", "Restoring session...".dimmed());
        let recovered = self.client.session().bootstrap().await;
        if recovered.state.is_authenticated() {
            return Ok(());
        }

        if let Some(notice) = recovered.notice {
            output::notice(notice);
        }
        bail!("No active session. Run 'libros auth login' first.")
    }
}
