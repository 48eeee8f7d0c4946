//! Dashboard menu for the current session.
//!
//! Composes the session snapshot, its role catalog, and the capability gate
//! into the menu a dashboard renders. The session is handed in explicitly and
//! replaced wholesale when it changes; the memoized menu follows the snapshot.

use crate::auth::{Role, Session};
use crate::navigation::{
    catalog_for, dashboard_entry, MenuCache, NavigationResult, Navigator, RootTree, RouteEntry,
    ScreenId,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub tree: RootTree,
    pub role: Role,
    pub entries: Vec<RouteEntry>,
}

pub struct DashboardService {
    session: Arc<Session>,
    cache: MenuCache,
}

impl DashboardService {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            cache: MenuCache::new(),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Swaps in a newer session snapshot (re-login or reloaded user data).
    pub fn set_session(&mut self, session: Arc<Session>) {
        self.session = session;
    }

    /// Visible menu for the session; the dashboard entry is always present.
    pub fn menu(&mut self) -> Arc<[RouteEntry]> {
        let role = self.session.role();
        self.cache.filtered(
            catalog_for(role),
            role,
            self.session.capabilities(),
            dashboard_entry(role).path,
        )
    }

    /// Menu as shown in a tile grid, with some screens left out (typically
    /// the dashboard the grid is rendered on).
    pub fn grid(&mut self, exclude: &[ScreenId]) -> Vec<RouteEntry> {
        self.menu()
            .iter()
            .filter(|entry| !exclude.contains(&entry.screen))
            .copied()
            .collect()
    }

    pub fn view(&mut self) -> MenuView {
        let role = self.session.role();
        MenuView {
            tree: RootTree::for_role(role),
            role,
            entries: self.menu().to_vec(),
        }
    }

    /// Opens the screen behind a menu entry.
    pub fn press(&self, navigator: &mut Navigator, entry: &RouteEntry) -> NavigationResult<()> {
        tracing::debug!(path = entry.path, screen = ?entry.screen, "menu item pressed");
        navigator.navigate_to_entry(entry)
    }

    pub fn cache(&self) -> &MenuCache {
        &self.cache
    }
}
