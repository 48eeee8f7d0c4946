//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the backend or
//! reading and writing stored credentials, providing a unified error handling
//! mechanism for all collaborator interactions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The backend rejected the token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid credentials for {0}")]
    InvalidCredentials(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AdapterResult<T> = Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AdapterError::Unauthorized,
            AdapterError::InvalidCredentials("teacher1".to_string()),
            AdapterError::Transport("connection reset".to_string()),
            AdapterError::Storage(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
