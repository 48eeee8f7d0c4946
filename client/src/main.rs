//! Main entry point for the LMS client binary.
//!
//! This file loads the configuration, restores the stored session from the
//! credential file, and prints the mounted screen tree together with the
//! permission-filtered menu as JSON.

use lms_adapters::{FileCredentialStore, InMemoryAuthBackend};
use lms_client::config::ClientConfig;
use lms_client::observability::init_tracing;
use lms_client::{ClientResult, DashboardService, RootTree, SessionManager};
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ClientResult<()> {
    let config = ClientConfig::from_env_or_file()?;
    init_tracing(&config.log_filter);

    let store = Arc::new(FileCredentialStore::new(&config.credentials_path));
    tracing::debug!(
        api_base_url = %config.api_base_url,
        path = %store.path().display(),
        "using credential store"
    );
    // Restoring a session needs no backend round-trip.
    let sessions = SessionManager::new(Arc::new(InMemoryAuthBackend::new()), store);

    let output = match sessions.restore().await? {
        Some(session) => serde_json::to_value(DashboardService::new(session).view())?,
        None => json!({ "tree": RootTree::Login }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
