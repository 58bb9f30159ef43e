//! Session state and the token refresh operation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use libros_core::traits::{Identity, TokenStore};
use libros_core::{
    AccessToken, AuthState, Credentials, RefreshToken, Result, SESSION_EXPIRED_NOTICE,
};

/// Result of the load-time recovery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    /// State after the attempt: `Authenticated` or `Unauthenticated`.
    pub state: AuthState,
    /// Text to show next to the login prompt, if any.
    pub notice: Option<&'static str>,
}

/// Owner of the access/refresh token pair.
///
/// The access token lives in memory only. The refresh token is mirrored to
/// the [`TokenStore`] on login and removed from it when a refresh fails or the
/// user logs out.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`). Readers take a
/// snapshot of the access token; a concurrent request holding a stale token
/// goes through its own refresh-and-retry.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    identity: Arc<dyn Identity>,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

#[derive(Default)]
struct SessionState {
    access_token: Option<AccessToken>,
    refresh_token: Option<RefreshToken>,
    auth: AuthState,
}

impl SessionManager {
    /// Create an unauthenticated session backed by `identity` and `store`.
    pub fn new<I, S>(identity: I, store: S) -> Self
    where
        I: Identity + 'static,
        S: TokenStore + 'static,
    {
        Self {
            inner: Arc::new(SessionInner {
                identity: Arc::new(identity),
                store: Arc::new(store),
                state: RwLock::new(SessionState::default()),
            }),
        }
    }

    /// Snapshot of the current access token.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.inner.state.read().await.access_token.clone()
    }

    /// Snapshot of the in-memory refresh token.
    pub async fn refresh_token(&self) -> Option<RefreshToken> {
        self.inner.state.read().await.refresh_token.clone()
    }

    /// Current authentication state.
    pub async fn state(&self) -> AuthState {
        self.inner.state.read().await.auth
    }

    /// Authenticate with email and password.
    ///
    /// Blank fields fail validation without a network call. On success both
    /// tokens are held in memory and the refresh token is persisted.
    ///
    /// # Errors
    ///
    /// Returns the identity service's rejection, a transport error, or a
    /// storage error if the refresh token could not be persisted.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        credentials.validate()?;

        let pair = self.inner.identity.login(credentials).await?;

        // Memory only changes once the refresh token is durable.
        self.inner.store.save_refresh_token(&pair.refresh_token).await?;

        let mut state = self.inner.state.write().await;
        state.access_token = Some(pair.access_token);
        state.refresh_token = Some(pair.refresh_token);
        state.auth = state.auth.on_login();
        info!("Logged in");
        Ok(())
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// The candidate is the in-memory refresh token, or else the stored one.
    /// Without a candidate this returns `false` and makes no network call.
    /// Any other failure clears the whole session, including the stored
    /// refresh token. On success only the access token changes.
    #[instrument(skip(self))]
    pub async fn refresh_access_token(&self) -> bool {
        let candidate = match self.candidate_refresh_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("No refresh token to re-authenticate with");
                let mut state = self.inner.state.write().await;
                state.auth = state.auth.on_refresh(false);
                return false;
            }
            Err(e) => {
                warn!(error = %e, "Could not read stored refresh token");
                self.clear().await;
                return false;
            }
        };

        match self.inner.identity.refresh(&candidate).await {
            Ok(access_token) => {
                let mut state = self.inner.state.write().await;
                state.access_token = Some(access_token);
                state.refresh_token = Some(candidate);
                state.auth = state.auth.on_refresh(true);
                info!("Access token refreshed");
                true
            }
            Err(e) => {
                warn!(error = %e, "Could not refresh access token");
                self.clear().await;
                false
            }
        }
    }

    /// Try to recover a session from the stored refresh token.
    ///
    /// Without a stored token this makes no network call and stays
    /// unauthenticated.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> Bootstrap {
        let stored = match self.inner.store.load_refresh_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not read stored refresh token");
                None
            }
        };

        let next = {
            let mut state = self.inner.state.write().await;
            state.auth = state.auth.on_load(stored.is_some());
            state.auth
        };

        if next != AuthState::Recovering {
            debug!(state = %next, "No session to recover");
            return Bootstrap {
                state: next,
                notice: None,
            };
        }

        info!("Stored refresh token found, recovering session");
        if self.refresh_access_token().await {
            Bootstrap {
                state: AuthState::Authenticated,
                notice: None,
            }
        } else {
            info!("Session could not be recovered, login required");
            Bootstrap {
                state: AuthState::Unauthenticated,
                notice: Some(SESSION_EXPIRED_NOTICE),
            }
        }
    }

    /// Drop both tokens and the stored refresh token.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.inner.state.write().await;
            state.access_token = None;
            state.refresh_token = None;
            state.auth = state.auth.on_logout();
        }
        self.inner.store.remove_refresh_token().await?;
        info!("Logged out");
        Ok(())
    }

    async fn candidate_refresh_token(&self) -> Result<Option<RefreshToken>> {
        if let Some(token) = self.refresh_token().await {
            return Ok(Some(token));
        }
        self.inner.store.load_refresh_token().await
    }

    async fn clear(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.access_token = None;
            state.refresh_token = None;
            state.auth = state.auth.on_refresh(false);
        }
        if let Err(e) = self.inner.store.remove_refresh_token().await {
            warn!(error = %e, "Could not remove stored refresh token");
        }
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
