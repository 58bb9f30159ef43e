//! HTTP client for the identity service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use libros_core::error::{AuthError, Error};
use libros_core::traits::Identity;
use libros_core::{AccessToken, Credentials, RefreshToken, Result, ServiceUrl, TokenPair};

use crate::http::HttpClient;

/// Endpoint for password login.
const LOGIN: &str = "/auth/login";

/// Endpoint for access-token refresh.
const REFRESH: &str = "/auth/refresh";

/// Endpoint for account registration.
const REGISTER: &str = "/auth/register";

/// Endpoint for the liveness probe.
const HEALTH: &str = "/health";

/// Shown when a rejected login carries no `error` field.
const LOGIN_FAILED: &str = "Error al iniciar sesión";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    msg: String,
}

/// Answer of the identity service's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// A network-backed identity service.
#[derive(Debug, Clone)]
pub struct HttpIdentity {
    base: ServiceUrl,
    client: HttpClient,
}

impl HttpIdentity {
    /// Create a client for the identity service at `base`.
    pub fn new(base: ServiceUrl) -> Result<Self> {
        Ok(Self::with_client(base, HttpClient::new()?))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_client(base: ServiceUrl, client: HttpClient) -> Self {
        Self { base, client }
    }

    /// Returns the identity service URL.
    pub fn url(&self) -> &ServiceUrl {
        &self.base
    }

    /// Register a new account. Returns the service's confirmation text.
    #[instrument(skip(self, password), fields(identity = %self.base))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        Credentials::new(email, password).validate()?;
        info!("Registering account");

        let request = RegisterRequest {
            username,
            email,
            password,
        };
        let response: RegisterResponse = self
            .client
            .post_json(&self.base.endpoint(REGISTER), &request)
            .await?;

        Ok(response.msg)
    }

    /// Probe the service's health endpoint.
    #[instrument(skip(self), fields(identity = %self.base))]
    pub async fn health(&self) -> Result<HealthStatus> {
        self.client.get_json(&self.base.endpoint(HEALTH)).await
    }
}

#[async_trait]
impl Identity for HttpIdentity {
    #[instrument(skip(self, credentials), fields(identity = %self.base, email = %credentials.email()))]
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        info!("Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        let response: LoginResponse = self
            .client
            .post_json(&self.base.endpoint(LOGIN), &request)
            .await
            .map_err(|e| match e {
                Error::Api(api) => Error::Auth(AuthError::Rejected(
                    api.message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
                )),
                other => other,
            })?;

        debug!("Login accepted");
        Ok(TokenPair {
            access_token: AccessToken::new(response.access_token),
            refresh_token: RefreshToken::new(response.refresh_token),
        })
    }

    #[instrument(skip(self, refresh_token), fields(identity = %self.base))]
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<AccessToken> {
        debug!("Exchanging refresh token");

        let request = RefreshRequest {
            refresh_token: refresh_token.as_str(),
        };

        let response: RefreshResponse = self
            .client
            .post_json(&self.base.endpoint(REFRESH), &request)
            .await
            .map_err(|e| match e {
                Error::Api(api) if api.is_unauthorized() => {
                    Error::Auth(AuthError::SessionExpired)
                }
                other => other,
            })?;

        Ok(AccessToken::new(response.access_token))
    }
}
