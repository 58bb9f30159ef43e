//! ISBN type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A book identifier as the catalog service keys it.
///
/// The catalog does not enforce checksums, so neither does this type: an
/// ISBN is any non-empty token without whitespace or commas (commas separate
/// ISBNs in a delete list).
///
/// # Example
///
/// ```
/// use libros_core::Isbn;
///
/// let isbn = Isbn::new(" 978-0132350884 ").unwrap();
/// assert_eq!(isbn.as_str(), "978-0132350884");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Create a new ISBN from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty or contains whitespace
    /// or commas.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the ISBN string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Isbn {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| c.is_whitespace() || *c == ',') {
            return Err(InvalidInputError::Isbn {
                value: s.to_string(),
                reason: format!("contains invalid character {:?}", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Isbn::new("  123  ").unwrap().as_str(), "123");
    }

    #[test]
    fn rejects_empty() {
        assert!(Isbn::new("").is_err());
        assert!(Isbn::new("   ").is_err());
    }

    #[test]
    fn rejects_inner_separators() {
        assert!(Isbn::new("123 456").is_err());
        assert!(Isbn::new("123,456").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let isbn = Isbn::new("978-1").unwrap();
        assert_eq!(serde_json::to_string(&isbn).unwrap(), "\"978-1\"");
        let back: Isbn = serde_json::from_str("\"978-1\"").unwrap();
        assert_eq!(back, isbn);
        assert!(serde_json::from_str::<Isbn>("\"\"").is_err());
    }
}
