//! Shared reqwest client and JSON helpers.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use libros_core::Result;
use libros_core::error::{ApiError, Error, TransportError};

/// Error body returned by the identity service.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonErrorResponse {
    pub error: Option<String>,
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let mapped = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() || err.is_body() {
        TransportError::Body {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(mapped)
}

/// HTTP client shared by the identity and catalog clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with the libros user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("libros/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        Ok(Self { client })
    }

    /// Returns the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a JSON body and decode a JSON answer.
    #[instrument(skip(self, body))]
    pub async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("JSON POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        handle_json(response).await
    }

    /// GET and decode a JSON answer.
    #[instrument(skip(self))]
    pub async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        debug!("JSON GET");
        let response = self.client.get(url).send().await.map_err(transport)?;
        handle_json(response).await
    }
}

async fn handle_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "JSON response");

    if status.is_success() {
        response.json::<R>().await.map_err(transport)
    } else {
        Err(Error::Api(parse_error_response(status, response).await))
    }
}

async fn parse_error_response(status: StatusCode, response: reqwest::Response) -> ApiError {
    match response.json::<JsonErrorResponse>().await {
        Ok(body) => ApiError::new(status.as_u16(), body.error),
        Err(_) => ApiError::new(status.as_u16(), None),
    }
}
