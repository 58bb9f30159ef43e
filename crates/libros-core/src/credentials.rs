//! Login credentials type.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// Shown when either login field is blank.
pub const CREDENTIALS_REQUIRED: &str = "Email y contraseña requeridos.";

/// Email and password for the identity service.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use libros_core::Credentials;
///
/// let creds = Credentials::new("ana@example.com", "secret");
/// assert_eq!(creds.email(), "ana@example.com");
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Both fields must be present before a login is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(InvalidInputError::form(CREDENTIALS_REQUIRED).into());
        }
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
