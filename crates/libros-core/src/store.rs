//! In-memory durable-state store, for tests and embedding.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::traits::{ConfigStore, TokenStore};
use crate::{ClientConfig, RefreshToken, Result};

/// Keeps the refresh token and configuration in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    refresh_token: RwLock<Option<RefreshToken>>,
    config: RwLock<Option<ClientConfig>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a refresh token.
    pub fn with_refresh_token(token: impl Into<String>) -> Self {
        Self {
            refresh_token: RwLock::new(Some(RefreshToken::new(token))),
            config: RwLock::new(None),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn load_refresh_token(&self) -> Result<Option<RefreshToken>> {
        Ok(self.refresh_token.read().await.clone())
    }

    async fn save_refresh_token(&self, token: &RefreshToken) -> Result<()> {
        *self.refresh_token.write().await = Some(token.clone());
        Ok(())
    }

    async fn remove_refresh_token(&self) -> Result<()> {
        self.refresh_token.write().await.take();
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load_config(&self) -> Result<Option<ClientConfig>> {
        Ok(self.config.read().await.clone())
    }

    async fn save_config(&self, config: &ClientConfig) -> Result<()> {
        *self.config.write().await = Some(config.clone());
        Ok(())
    }

    async fn reset_config(&self) -> Result<()> {
        self.config.write().await.take();
        Ok(())
    }
}
