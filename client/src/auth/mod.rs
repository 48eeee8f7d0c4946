//! Authentication module for managing the user session and access control.
//!
//! This module provides the public interface for role resolution, center
//! capability gating, and the session lifecycle (login, restore, reload,
//! logout, expiry).

pub mod errors;
pub mod models;
pub mod permissions;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use models::*;
pub use permissions::*;
pub use service::*;
