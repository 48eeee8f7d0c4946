//! Core business logic for the session lifecycle.
//!
//! `SessionManager` owns the current [`Session`] snapshot and orchestrates the
//! backend and the credential store: restoring a stored session at start-up,
//! logging in and out, reloading the user record, and dropping the session when
//! an upstream call reports that the token is no longer accepted.

use super::errors::{AuthError, AuthResult};
use super::models::{CapabilityMap, Role, User};
use lms_adapters::{AdapterError, AdapterResult, AuthBackend, CredentialStore, LoginPayload};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Immutable snapshot of an authenticated session.
///
/// A refresh never mutates a session in place; it publishes a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn capabilities(&self) -> Option<&Arc<CapabilityMap>> {
        self.user.capabilities()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

pub struct SessionManager {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn CredentialStore>,
    current: RwLock<Option<Arc<Session>>>,
}

impl SessionManager {
    pub fn new(backend: Arc<dyn AuthBackend>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            backend,
            store,
            current: RwLock::new(None),
        }
    }

    pub async fn current(&self) -> Option<Arc<Session>> {
        self.current.read().await.clone()
    }

    /// Rebuilds the session from stored credentials.
    ///
    /// A session exists only when both a token and a user record are stored.
    pub async fn restore(&self) -> AuthResult<Option<Arc<Session>>> {
        let token = self.store.token().await?;
        let stored = self.store.stored_user().await?;
        let session = match (token, stored) {
            (Some(token), Some(user)) => Some(Arc::new(Session::new(token, User::from(user)))),
            _ => None,
        };
        if let Some(session) = &session {
            tracing::info!(
                username = %session.user().username,
                role = %session.role(),
                "restored stored session"
            );
        }
        *self.current.write().await = session.clone();
        Ok(session)
    }

    pub async fn login(&self, payload: &LoginPayload) -> AuthResult<Arc<Session>> {
        let response = self.backend.login(payload).await.map_err(|err| match err {
            AdapterError::InvalidCredentials(_) | AdapterError::Unauthorized => {
                AuthError::InvalidCredentials
            }
            other => AuthError::Adapter(other),
        })?;

        let mut current = self.current.write().await;
        self.store.set_token(&response.access_token).await?;
        self.store.set_stored_user(&response.user).await?;

        let session = Arc::new(Session::new(response.access_token, User::from(response.user)));
        tracing::info!(
            username = %session.user().username,
            role = %session.role(),
            "logged in"
        );
        *current = Some(Arc::clone(&session));
        Ok(session)
    }

    pub async fn logout(&self) -> AuthResult<()> {
        let mut current = self.current.write().await;
        current.take();
        self.store.clear().await?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Drops the session after the backend rejected its token.
    pub async fn expire(&self) {
        let mut current = self.current.write().await;
        self.expire_locked(&mut current).await;
    }

    async fn expire_locked(&self, current: &mut Option<Arc<Session>>) {
        current.take();
        if let Err(err) = self.store.clear().await {
            tracing::error!(error = %err, "failed to clear stored credentials on expiry");
        }
        tracing::warn!("session expired");
    }

    /// Expires `session` only if it is still the published one.
    async fn expire_if_current(&self, session: &Arc<Session>) {
        let mut current = self.current.write().await;
        if is_same(&current, session) {
            self.expire_locked(&mut current).await;
        } else {
            tracing::debug!("ignoring rejection of a superseded session token");
        }
    }

    /// Runs an upstream call with the current token.
    ///
    /// An `Unauthorized` answer ends the session and surfaces as
    /// [`AuthError::SessionExpired`]. If the session was replaced while the
    /// call was in flight, the newer session is left alone.
    pub async fn authorized<T, F, Fut>(&self, op: F) -> AuthResult<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = AdapterResult<T>>,
    {
        let session = self.current().await.ok_or(AuthError::NotAuthenticated)?;
        self.call_as(&session, op).await
    }

    async fn call_as<T, F, Fut>(&self, session: &Arc<Session>, op: F) -> AuthResult<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = AdapterResult<T>>,
    {
        match op(session.token().to_string()).await {
            Ok(value) => Ok(value),
            Err(AdapterError::Unauthorized) => {
                self.expire_if_current(session).await;
                Err(AuthError::SessionExpired)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Refetches the user record and publishes a fresh session snapshot.
    ///
    /// Fails with [`AuthError::NotAuthenticated`] when the session it started
    /// from was logged out or replaced before the backend answered; nothing is
    /// published or stored in that case.
    pub async fn reload_user(&self) -> AuthResult<Arc<Session>> {
        let started = self.current().await.ok_or(AuthError::NotAuthenticated)?;
        let backend = Arc::clone(&self.backend);
        let user = self
            .call_as(&started, |token| async move { backend.current_user(&token).await })
            .await?;

        let mut current = self.current.write().await;
        if !is_same(&current, &started) {
            tracing::debug!("session changed during reload, discarding user data");
            return Err(AuthError::NotAuthenticated);
        }
        self.store.set_stored_user(&user).await?;
        let session = Arc::new(Session::new(started.token(), User::from(user)));
        tracing::debug!(username = %session.user().username, "reloaded user data");
        *current = Some(Arc::clone(&session));
        Ok(session)
    }
}

fn is_same(current: &Option<Arc<Session>>, session: &Arc<Session>) -> bool {
    current
        .as_ref()
        .is_some_and(|published| Arc::ptr_eq(published, session))
}
