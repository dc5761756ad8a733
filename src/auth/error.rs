//! Error types for the authentication strategies.

use thiserror::Error;

/// Errors that can occur while authenticating a user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// The supplied credentials are malformed or wrong.
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// The identity provider could not be reached.
    #[error("Authentication provider unavailable: {0}")]
    ProviderUnavailable(String),
}
