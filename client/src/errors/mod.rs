//! Global client error types.
//!
//! This module defines the top-level error that wraps the failures of the
//! session layer, the router, configuration, and output serialization, for
//! consistent handling at the binary's edge.

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::navigation::NavigationError;
use lms_adapters::AdapterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
