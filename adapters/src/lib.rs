//! Core `adapters` crate for abstracting the LMS backend and credential storage.
//!
//! This crate defines the `AuthBackend` and `CredentialStore` traits, which outline
//! the operations the mobile client core needs from the REST backend and from local
//! persistent storage, and provides concrete implementations (in-memory, file-backed).

pub mod errors;
pub mod memory;
pub mod models;
pub mod storage;

use async_trait::async_trait;

pub use errors::{AdapterError, AdapterResult};
pub use memory::{InMemoryAuthBackend, MemoryCredentialStore};
pub use models::{AuthResponse, AuthUser, CenterInfo, LoginPayload};
pub use storage::FileCredentialStore;

/// Authentication endpoints of the LMS backend.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchanges credentials for an access token and the authenticated user.
    async fn login(&self, payload: &LoginPayload) -> AdapterResult<AuthResponse>;

    /// Fetches the user record (including center permissions) for a token.
    async fn current_user(&self, token: &str) -> AdapterResult<AuthUser>;
}

/// Local persistence of the access token and the last known user record.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn token(&self) -> AdapterResult<Option<String>>;
    async fn set_token(&self, token: &str) -> AdapterResult<()>;
    async fn stored_user(&self) -> AdapterResult<Option<AuthUser>>;
    async fn set_stored_user(&self, user: &AuthUser) -> AdapterResult<()>;
    async fn clear(&self) -> AdapterResult<()>;
}
