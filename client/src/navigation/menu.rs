//! Permission-filtered menus.
//!
//! `filter_menu` applies the capability gate to a route catalog and guarantees
//! the dashboard entry survives. `MenuCache` memoizes the result on the
//! identity of its inputs so repeated renders of an unchanged session reuse it.

use super::routes::RouteEntry;
use crate::auth::{is_visible, CapabilityMap, Role};
use std::sync::Arc;

/// Filters a catalog down to the entries the session may see.
///
/// Catalog order is preserved. If the gate removed the entry whose path is
/// `dashboard_path`, it is put back at the front. Pure and idempotent.
pub fn filter_menu(
    catalog: &[RouteEntry],
    role: Role,
    capabilities: Option<&CapabilityMap>,
    dashboard_path: &str,
) -> Vec<RouteEntry> {
    let is_super_admin = role.is_super_admin();
    let mut visible: Vec<RouteEntry> = catalog
        .iter()
        .filter(|entry| is_visible(entry.path, capabilities, is_super_admin))
        .copied()
        .collect();

    if !visible.iter().any(|entry| entry.path == dashboard_path) {
        match catalog.iter().find(|entry| entry.path == dashboard_path) {
            Some(dashboard) => visible.insert(0, *dashboard),
            None => tracing::debug!(dashboard_path = %dashboard_path, "dashboard entry not in catalog"),
        }
    }
    visible
}

struct CacheKey {
    catalog: usize,
    catalog_len: usize,
    role: Role,
    // Held so the pointer identity cannot be reused while cached.
    capabilities: Option<Arc<CapabilityMap>>,
    dashboard_path: String,
}

impl CacheKey {
    fn matches(
        &self,
        catalog: &'static [RouteEntry],
        role: Role,
        capabilities: Option<&Arc<CapabilityMap>>,
        dashboard_path: &str,
    ) -> bool {
        let same_caps = match (&self.capabilities, capabilities) {
            (Some(cached), Some(current)) => Arc::ptr_eq(cached, current),
            (None, None) => true,
            _ => false,
        };
        self.catalog == catalog.as_ptr() as usize
            && self.catalog_len == catalog.len()
            && self.role == role
            && same_caps
            && self.dashboard_path == dashboard_path
    }
}

/// Single-slot memo for [`filter_menu`].
///
/// Keyed on catalog identity, role, and capability-map identity. A refreshed
/// capability snapshot is a new `Arc`, so it always recomputes.
#[derive(Default)]
pub struct MenuCache {
    slot: Option<(CacheKey, Arc<[RouteEntry]>)>,
    hits: u64,
    misses: u64,
}

impl MenuCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(
        &mut self,
        catalog: &'static [RouteEntry],
        role: Role,
        capabilities: Option<&Arc<CapabilityMap>>,
        dashboard_path: &str,
    ) -> Arc<[RouteEntry]> {
        if let Some((key, menu)) = &self.slot {
            if key.matches(catalog, role, capabilities, dashboard_path) {
                self.hits += 1;
                return Arc::clone(menu);
            }
        }

        self.misses += 1;
        let menu: Arc<[RouteEntry]> =
            filter_menu(catalog, role, capabilities.map(|caps| &**caps), dashboard_path).into();
        let key = CacheKey {
            catalog: catalog.as_ptr() as usize,
            catalog_len: catalog.len(),
            role,
            capabilities: capabilities.cloned(),
            dashboard_path: dashboard_path.to_string(),
        };
        self.slot = Some((key, Arc::clone(&menu)));
        menu
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
