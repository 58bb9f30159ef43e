//! Authentication state machine for the bootstrap flow.

use std::fmt;

/// Shown with the login prompt when a stored session could not be recovered.
pub const SESSION_EXPIRED_NOTICE: &str = "Tu sesión expiró. Por favor, inicia sesión de nuevo.";

/// Where the client stands with the identity service.
///
/// ```text
/// Unauthenticated --stored refresh token--> Recovering
/// Recovering --refresh ok--> Authenticated (any successful refresh)
/// Recovering --refresh failed--> Unauthenticated
/// any --login ok--> Authenticated
/// any --logout / refresh failed--> Unauthenticated
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Recovering,
    Authenticated,
}

impl AuthState {
    /// Transition taken at load time.
    pub fn on_load(self, has_stored_refresh_token: bool) -> Self {
        match self {
            AuthState::Unauthenticated if has_stored_refresh_token => AuthState::Recovering,
            other => other,
        }
    }

    /// Transition taken when a refresh attempt completes.
    pub fn on_refresh(self, succeeded: bool) -> Self {
        if succeeded {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Transition taken on a successful explicit login.
    pub fn on_login(self) -> Self {
        AuthState::Authenticated
    }

    /// Transition taken on logout.
    pub fn on_logout(self) -> Self {
        AuthState::Unauthenticated
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthState::Unauthenticated => "unauthenticated",
            AuthState::Recovering => "recovering",
            AuthState::Authenticated => "authenticated",
        };
        f.write_str(label)
    }
}
