//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account matches the login and password.
    #[error("invalid login or password")]
    NotFound,

    /// Password hashing failed while building a hashed directory.
    #[error("password hashing error")]
    PasswordHash,
}

/// Error returned when parsing an unknown authentication backend name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown auth backend '{0}' (expected 'demo' or 'argon2')")]
pub struct AuthBackendError(pub String);
