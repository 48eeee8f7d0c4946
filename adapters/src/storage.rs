//! File-backed credential storage.
//!
//! Persists the access token and the last known user record as a single JSON
//! document. A missing file means "nothing stored"; an unreadable document or a
//! user record that no longer parses is treated the same way, so a bad file can
//! never keep the client from reaching the login screen.

use crate::{AdapterResult, AuthUser, CredentialStore};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<serde_json::Value>,
}

pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the document.
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AdapterResult<StoredCredentials> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoredCredentials::default()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_slice(&raw) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                log::warn!(
                    "ignoring unreadable credentials file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(StoredCredentials::default())
            }
        }
    }

    async fn save(&self, doc: &StoredCredentials) -> AdapterResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let raw = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn token(&self) -> AdapterResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.token)
    }

    async fn set_token(&self, token: &str) -> AdapterResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        doc.token = Some(token.to_string());
        self.save(&doc).await
    }

    async fn stored_user(&self) -> AdapterResult<Option<AuthUser>> {
        let _guard = self.lock.lock().await;
        let Some(value) = self.load().await?.user else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                log::warn!("stored user record is corrupt, ignoring it: {}", err);
                Ok(None)
            }
        }
    }

    async fn set_stored_user(&self, user: &AuthUser) -> AdapterResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        doc.user = Some(serde_json::to_value(user)?);
        self.save(&doc).await
    }

    async fn clear(&self) -> AdapterResult<()> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
