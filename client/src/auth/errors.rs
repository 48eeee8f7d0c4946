//! Custom error types specific to authentication failures.
//!
//! This module defines the errors the session layer surfaces to callers. The
//! navigation core itself never fails; these only come out of login, restore,
//! reload and authorized upstream calls.

use lms_adapters::AdapterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("session expired, please log in again")]
    SessionExpired,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AuthError::InvalidCredentials,
            AuthError::SessionExpired,
            AuthError::NotAuthenticated,
            AuthError::Adapter(AdapterError::Transport("timeout".to_string())),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
