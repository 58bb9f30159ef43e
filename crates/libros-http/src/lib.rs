//! libros-http - HTTP session, authenticated fetch and catalog client.
//!
//! # Example
//!
//! ```no_run
//! use libros_core::{ClientConfig, Credentials, MemoryStore};
//! use libros_http::LibrosClient;
//!
//! # async fn example() -> libros_core::Result<()> {
//! let client = LibrosClient::new(ClientConfig::default(), MemoryStore::new())?;
//! client
//!     .session()
//!     .login(&Credentials::new("ana@example.com", "secreto"))
//!     .await?;
//!
//! let books = client.catalog().list_all().await?;
//! println!("{}", books.status_line());
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod catalog;
mod fetch;
mod http;
mod identity;
mod session;

pub use bootstrap::{Startup, start};
pub use catalog::{
    CatalogClient, CatalogResult, EMPTY_STATUS, FAILED_STATUS, InsertOutcome, LOADED_STATUS,
    ResultView,
};
pub use fetch::{ApiRequest, AuthenticatedClient};
pub use http::HttpClient;
pub use identity::{HealthStatus, HttpIdentity};
pub use session::{Bootstrap, SessionManager};

use libros_core::traits::TokenStore;
use libros_core::{ClientConfig, Result};

/// Wires the identity, session, wrapper and catalog clients together.
#[derive(Debug, Clone)]
pub struct LibrosClient {
    identity: HttpIdentity,
    session: SessionManager,
    catalog: CatalogClient,
}

impl LibrosClient {
    /// Build a client for `config`, keeping the refresh token in `store`.
    pub fn new<S: TokenStore + 'static>(config: ClientConfig, store: S) -> Result<Self> {
        let http = HttpClient::new()?;
        let identity = HttpIdentity::with_client(config.identity_url().clone(), http.clone());
        let session = SessionManager::new(identity.clone(), store);
        let fetch = AuthenticatedClient::new(http, session.clone());
        let catalog = CatalogClient::new(config, fetch);

        Ok(Self {
            identity,
            session,
            catalog,
        })
    }

    pub fn identity(&self) -> &HttpIdentity {
        &self.identity
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Recover the stored session and initialize the catalog.
    pub async fn start(&self) -> Startup {
        start(&self.session, &self.catalog).await
    }
}
