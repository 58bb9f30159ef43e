//! libros-core - Core types and traits for the books catalog client.

pub mod auth_state;
pub mod book;
pub mod config;
pub mod credentials;
pub mod error;
pub mod forms;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;
pub mod xml;

pub use auth_state::{AuthState, SESSION_EXPIRED_NOTICE};
pub use book::{BookUpdate, DeleteBooks, NewBook, OperationOutcome};
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use error::Error;
pub use forms::{DeleteForm, InsertForm, UpdateForm};
pub use store::MemoryStore;
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use traits::{ConfigStore, Identity, TokenStore};
pub use types::{Isbn, Protocol, ServiceUrl};
pub use xml::CatalogOptions;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
