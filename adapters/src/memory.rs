//! In-memory implementations of the collaborator traits.
//!
//! `InMemoryAuthBackend` stands in for the REST backend in tests and local runs;
//! `MemoryCredentialStore` keeps credentials for the lifetime of the process only.

use crate::{AdapterError, AdapterResult, AuthBackend, AuthResponse, AuthUser, CredentialStore, LoginPayload};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

struct Account {
    password: String,
    user: AuthUser,
}

#[derive(Default)]
pub struct InMemoryAuthBackend {
    accounts: RwLock<HashMap<String, Account>>,
    tokens: RwLock<HashMap<String, String>>,
    next_token: AtomicU64,
}

impl InMemoryAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an account keyed by the user's username.
    pub async fn add_account(&self, password: impl Into<String>, user: AuthUser) {
        let username = user.username.clone();
        self.accounts.write().await.insert(
            username,
            Account {
                password: password.into(),
                user,
            },
        );
    }

    /// Replaces the stored user record, e.g. after center permissions change.
    pub async fn update_user(&self, user: AuthUser) -> AdapterResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&user.username)
            .ok_or_else(|| AdapterError::InvalidCredentials(user.username.clone()))?;
        account.user = user;
        Ok(())
    }

    /// Invalidates a previously issued token so later calls see `Unauthorized`.
    pub async fn revoke_token(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
    async fn login(&self, payload: &LoginPayload) -> AdapterResult<AuthResponse> {
        let user = {
            let accounts = self.accounts.read().await;
            match accounts.get(&payload.username) {
                Some(account) if account.password == payload.password => account.user.clone(),
                _ => {
                    log::debug!("login rejected for {}", payload.username);
                    return Err(AdapterError::InvalidCredentials(payload.username.clone()));
                }
            }
        };

        let seq = self.next_token.fetch_add(1, Ordering::Relaxed);
        let access_token = format!("mem-{}-{}", user.username, seq);
        self.tokens
            .write()
            .await
            .insert(access_token.clone(), user.username.clone());
        Ok(AuthResponse { access_token, user })
    }

    async fn current_user(&self, token: &str) -> AdapterResult<AuthUser> {
        let username = self
            .tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AdapterError::Unauthorized)?;
        self.accounts
            .read()
            .await
            .get(&username)
            .map(|account| account.user.clone())
            .ok_or(AdapterError::Unauthorized)
    }
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
    user: RwLock<Option<AuthUser>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn token(&self) -> AdapterResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set_token(&self, token: &str) -> AdapterResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn stored_user(&self) -> AdapterResult<Option<AuthUser>> {
        Ok(self.user.read().await.clone())
    }

    async fn set_stored_user(&self, user: &AuthUser) -> AdapterResult<()> {
        *self.user.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> AdapterResult<()> {
        *self.token.write().await = None;
        *self.user.write().await = None;
        Ok(())
    }
}
