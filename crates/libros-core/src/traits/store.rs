//! Durable client-side state.

use async_trait::async_trait;

use crate::{ClientConfig, RefreshToken, Result};

/// Durable storage for the refresh token.
///
/// This is the only session artifact that survives between runs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the stored refresh token, if any.
    async fn load_refresh_token(&self) -> Result<Option<RefreshToken>>;

    /// Persist the refresh token, replacing any previous one.
    async fn save_refresh_token(&self, token: &RefreshToken) -> Result<()>;

    /// Remove the stored refresh token. Removing an absent token is not an error.
    async fn remove_refresh_token(&self) -> Result<()>;
}

/// Durable storage for the connection configuration.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration, if any.
    async fn load_config(&self) -> Result<Option<ClientConfig>>;

    /// Persist the configuration.
    async fn save_config(&self, config: &ClientConfig) -> Result<()>;

    /// Forget the stored configuration so defaults apply again.
    async fn reset_config(&self) -> Result<()>;
}

#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for std::sync::Arc<T> {
    async fn load_refresh_token(&self) -> Result<Option<RefreshToken>> {
        (**self).load_refresh_token().await
    }
    async fn save_refresh_token(&self, token: &RefreshToken) -> Result<()> {
        (**self).save_refresh_token(token).await
    }
    async fn remove_refresh_token(&self) -> Result<()> {
        (**self).remove_refresh_token().await
    }
}

#[async_trait]
impl<T: ConfigStore + ?Sized> ConfigStore for std::sync::Arc<T> {
    async fn load_config(&self) -> Result<Option<ClientConfig>> {
        (**self).load_config().await
    }
    async fn save_config(&self, config: &ClientConfig) -> Result<()> {
        (**self).save_config(config).await
    }
    async fn reset_config(&self) -> Result<()> {
        (**self).reset_config().await
    }
}
