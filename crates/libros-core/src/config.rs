//! Catalog connection configuration.
//!
//! A [`ClientConfig`] is built once, from durable storage or defaults, and
//! passed to everything that builds a URL. Changing a setting produces a new
//! config through one of the `with_*` methods; the caller decides whether to
//! persist it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;
use crate::error::InvalidInputError;
use crate::traits::ConfigStore;
use crate::types::{Isbn, Protocol, ServiceUrl};

/// Default catalog host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default catalog port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default catalog base path.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Default identity service URL.
pub const DEFAULT_IDENTITY_URL: &str = "http://localhost:5002";

/// Connection settings for the catalog and identity services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    protocol: Protocol,
    host: String,
    port: u16,
    base_path: String,
    identity_url: ServiceUrl,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            identity_url: ServiceUrl::new(DEFAULT_IDENTITY_URL)
                .expect("default identity URL is valid"),
        }
    }
}

impl ClientConfig {
    /// Load the stored configuration, or the defaults if nothing is stored.
    pub async fn load_or_default<S: ConfigStore + ?Sized>(store: &S) -> Result<Self> {
        match store.load_config().await? {
            Some(config) => {
                config.root_url()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn identity_url(&self) -> &ServiceUrl {
        &self.identity_url
    }

    /// Returns a copy using a different protocol.
    pub fn with_protocol(&self, protocol: Protocol) -> Self {
        Self {
            protocol,
            ..self.clone()
        }
    }

    /// Returns a copy using a different host.
    ///
    /// # Errors
    ///
    /// Fails if the host is blank or does not form a valid URL.
    pub fn with_host(&self, host: &str) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(InvalidInputError::Missing { field: "host" }.into());
        }
        let next = Self {
            host: host.to_string(),
            ..self.clone()
        };
        next.root_url()?;
        Ok(next)
    }

    /// Returns a copy using a different port.
    pub fn with_port(&self, port: u16) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    /// Returns a copy using a different base path.
    ///
    /// The path is normalized to start with `/` and to have no trailing `/`;
    /// an empty path means the service root.
    pub fn with_base_path(&self, base_path: &str) -> Result<Self> {
        let trimmed = base_path.trim().trim_matches('/');
        let normalized = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        let next = Self {
            base_path: normalized,
            ..self.clone()
        };
        next.root_url()?;
        Ok(next)
    }

    /// Returns a copy using a different identity service.
    pub fn with_identity_url(&self, identity_url: ServiceUrl) -> Self {
        Self {
            identity_url,
            ..self.clone()
        }
    }

    /// The catalog root, e.g. `http://localhost:5000/api`.
    pub fn root_url(&self) -> Result<Url> {
        let raw = format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.base_path
        );
        let url = Url::parse(&raw).map_err(|e| InvalidInputError::Url {
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        if url.host_str().is_none() {
            return Err(InvalidInputError::Url {
                value: raw,
                reason: "must have a host".to_string(),
            }
            .into());
        }
        Ok(url)
    }

    /// URL listing every book.
    pub fn books_url(&self) -> Result<Url> {
        self.catalog_url(&["books"])
    }

    /// URL for a single book by ISBN.
    pub fn isbn_url(&self, isbn: &Isbn) -> Result<Url> {
        self.catalog_url(&["books", "isbn", isbn.as_str()])
    }

    /// URL for the books of one author.
    pub fn author_url(&self, author: &str) -> Result<Url> {
        self.catalog_url(&["books", "author", author])
    }

    /// URL for the books in one format.
    pub fn format_url(&self, format: &str) -> Result<Url> {
        self.catalog_url(&["books", "format", format])
    }

    pub fn insert_url(&self) -> Result<Url> {
        self.catalog_url(&["books", "insert"])
    }

    pub fn update_url(&self, isbn: &Isbn) -> Result<Url> {
        self.catalog_url(&["books", "update", isbn.as_str()])
    }

    pub fn delete_url(&self) -> Result<Url> {
        self.catalog_url(&["books", "delete"])
    }

    /// The informational endpoint paths, relative to the host.
    pub fn endpoint_templates(&self) -> Vec<(&'static str, String)> {
        let base = &self.base_path;
        vec![
            ("all", format!("{}/books", base)),
            ("isbn", format!("{}/books/isbn/{{isbn}}", base)),
            ("format", format!("{}/books/format/{{format}}", base)),
            ("author", format!("{}/books/author/{{author}}", base)),
        ]
    }

    fn catalog_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.root_url()?;
        let raw = url.to_string();
        url.path_segments_mut()
            .map_err(|_| InvalidInputError::Url {
                value: raw,
                reason: "cannot hold a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
