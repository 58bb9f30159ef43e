//! Catalog mutation payloads and their outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Isbn;
use crate::xml;

/// Used when a mutation response carries no `<message>`.
pub const UNKNOWN_RESPONSE: &str = "Respuesta desconocida";

/// Body of an insert request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub isbn: Isbn,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub stock: i32,
    pub genre: String,
    pub format: String,
    /// Comma-separated author names, as the catalog stores them.
    pub authors: String,
}

/// Body of an update request. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
}

impl BookUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

/// Body of a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBooks {
    pub isbns: Vec<Isbn>,
}

/// What a mutation endpoint answered.
///
/// Success is decided by the HTTP status alone; the `<message>` text is shown
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub status: u16,
    pub message: String,
}

impl OperationOutcome {
    /// Interpret a mutation response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = xml::message(body).unwrap_or_else(|| UNKNOWN_RESPONSE.to_string());
        Self { status, message }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(f, "Éxito: {}", self.message)
        } else {
            write!(f, "Error: {} (Código: {})", self.message, self.status)
        }
    }
}
