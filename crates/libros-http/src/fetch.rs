//! Authenticated requests with one transparent refresh-and-retry.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, info, instrument};
use url::Url;

use libros_core::Result;
use libros_core::error::{AuthError, InvalidInputError};

use crate::http::{HttpClient, transport};
use crate::session::SessionManager;

/// A request the wrapper can issue more than once.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Add a header. An `Authorization` header set here is replaced when the
    /// session holds an access token.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            InvalidInputError::form(format!("could not encode request body: {e}"))
        })?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(bytes);
        Ok(self)
    }

    /// Raw payload bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Issues requests with the session's bearer token.
///
/// A 401 triggers exactly one token refresh. If it succeeds the identical
/// request is sent once more and that second response is returned whatever
/// its status; if it fails the original 401 is returned.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    http: HttpClient,
    session: SessionManager,
}

impl AuthenticatedClient {
    pub fn new(http: HttpClient, session: SessionManager) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Send `request`, refreshing and retrying once on 401.
    ///
    /// # Errors
    ///
    /// Transport failures on either attempt surface as-is.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: &ApiRequest) -> Result<reqwest::Response> {
        let response = self.send(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!("Access token rejected, attempting refresh");
        if !self.session.refresh_access_token().await {
            info!("Refresh failed, returning original response");
            return Ok(response);
        }

        debug!("Retrying with refreshed token");
        self.send(request).await
    }

    async fn send(&self, request: &ApiRequest) -> Result<reqwest::Response> {
        let mut headers = request.headers.clone();
        if let Some(token) = self.session.access_token().await {
            let value = HeaderValue::from_str(&token.bearer())
                .map_err(|_| AuthError::MalformedToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self
            .http
            .inner()
            .request(request.method.clone(), request.url.clone())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder.send().await.map_err(transport)
    }
}
