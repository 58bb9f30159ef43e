//! Error types for the libros client.
//!
//! One error type with explicit variants for validation, authentication,
//! remote API, transport, XML and storage failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for libros operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (bad credentials, expired refresh token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Remote API errors (non-2xx with a message body).
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors. These never reach the wire.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Malformed XML in a catalog response.
    #[error("xml error: {0}")]
    Xml(#[from] XmlError),

    /// Durable state could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns true for errors that were caught locally before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be read or decoded.
    #[error("malformed response: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity service rejected the login.
    #[error("{0}")]
    Rejected(String),

    /// The refresh token was rejected; the session has been cleared.
    #[error("session expired")]
    SessionExpired,

    /// A token contains characters that cannot be sent in a header.
    #[error("token cannot be used in an Authorization header")]
    MalformedToken,
}

/// A non-success response from the catalog or identity service.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Message extracted from the response body, if any.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// The message to show the user: the server's, or `Error <status>`.
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Error {}", self.status))
    }

    /// Check if this is an authentication error.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A form was submitted with missing or unparsable fields.
    #[error("{message}")]
    Form { message: String },

    /// A required query value was blank.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// A numeric field could not be parsed.
    #[error("invalid {field} '{value}'")]
    Number { field: &'static str, value: String },

    /// Invalid ISBN.
    #[error("invalid ISBN '{value}': {reason}")]
    Isbn { value: String, reason: String },

    /// Invalid service URL or connection setting.
    #[error("invalid URL '{value}': {reason}")]
    Url { value: String, reason: String },
}

impl InvalidInputError {
    /// Build a form-level validation error with a user-facing message.
    pub fn form(message: impl Into<String>) -> Self {
        InvalidInputError::Form {
            message: message.into(),
        }
    }
}

/// XML parsing and formatting errors.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The document could not be parsed.
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// The document could not be re-serialized.
    #[error("could not write XML: {message}")]
    Write { message: String },
}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Stored state could not be decoded or encoded.
    #[error("invalid stored state: {message}")]
    Serialization { message: String },
}
