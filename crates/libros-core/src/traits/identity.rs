//! Identity service trait.

use async_trait::async_trait;

use crate::{AccessToken, Credentials, RefreshToken, Result, TokenPair};

/// The service that issues and refreshes tokens.
#[async_trait]
pub trait Identity: Send + Sync {
    /// Exchange credentials for an access/refresh token pair.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair>;

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated.
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<AccessToken>;
}

#[async_trait]
impl<T: Identity + ?Sized> Identity for std::sync::Arc<T> {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        (**self).login(credentials).await
    }
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<AccessToken> {
        (**self).refresh(refresh_token).await
    }
}
