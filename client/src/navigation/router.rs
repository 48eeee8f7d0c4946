//! Navigation router: mounted screen tree and its stack.
//!
//! The root tree is chosen from the session (login when there is none, else by
//! role). Each tree registers its catalog screens plus a few auxiliary ones, and
//! keeps a stack whose bottom is always the role's dashboard.

use super::errors::{NavigationError, NavigationResult};
use super::routes::{catalog_for, RouteEntry};
use super::screens::{Screen, ScreenId};
use crate::auth::{Role, Session};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootTree {
    Login,
    Teacher,
    Admin,
    SuperAdmin,
    Student,
}

impl RootTree {
    pub fn for_role(role: Role) -> RootTree {
        match role {
            Role::SuperAdmin => RootTree::SuperAdmin,
            Role::Admin => RootTree::Admin,
            Role::Teacher => RootTree::Teacher,
            Role::Student => RootTree::Student,
        }
    }

    pub fn for_session(session: Option<&Session>) -> RootTree {
        session.map_or(RootTree::Login, |session| RootTree::for_role(session.role()))
    }

    pub fn role(self) -> Option<Role> {
        match self {
            RootTree::Login => None,
            RootTree::Teacher => Some(Role::Teacher),
            RootTree::Admin => Some(Role::Admin),
            RootTree::SuperAdmin => Some(Role::SuperAdmin),
            RootTree::Student => Some(Role::Student),
        }
    }

    pub fn dashboard(self) -> Option<ScreenId> {
        self.role().map(|role| catalog_for(role)[0].screen)
    }

    fn auxiliary_screens(self) -> &'static [ScreenId] {
        match self {
            RootTree::Login => &[],
            RootTree::Teacher | RootTree::Admin => &[ScreenId::EditGroup, ScreenId::Profile],
            RootTree::SuperAdmin | RootTree::Student => &[ScreenId::Profile],
        }
    }

    pub fn registers(self, screen: ScreenId) -> bool {
        let in_catalog = self
            .role()
            .is_some_and(|role| catalog_for(role).iter().any(|entry| entry.screen == screen));
        in_catalog || self.auxiliary_screens().contains(&screen)
    }
}

pub struct Navigator {
    tree: RootTree,
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn mount(tree: RootTree) -> Self {
        let stack = tree
            .dashboard()
            .and_then(Screen::plain)
            .into_iter()
            .collect();
        tracing::debug!(?tree, "mounted screen tree");
        Self { tree, stack }
    }

    pub fn for_session(session: Option<&Session>) -> Self {
        Self::mount(RootTree::for_session(session))
    }

    /// Re-evaluates the root tree after a session change.
    ///
    /// A different tree (role change, login, logout) replaces the stack; the
    /// same tree keeps it, including screens a capability refresh may have
    /// hidden. Follow with [`Navigator::retain_reachable`] to drop those.
    pub fn remount(&mut self, session: Option<&Session>) {
        let tree = RootTree::for_session(session);
        if tree != self.tree {
            *self = Self::mount(tree);
        }
    }

    pub fn tree(&self) -> RootTree {
        self.tree
    }

    pub fn current(&self) -> Option<&Screen> {
        self.stack.last()
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn can_open(&self, screen: ScreenId) -> bool {
        self.tree.registers(screen)
    }

    /// Opens a screen. A screen already on the stack is returned to (with the
    /// new parameters) instead of pushed again.
    pub fn navigate(&mut self, screen: Screen) -> NavigationResult<()> {
        if self.tree == RootTree::Login {
            return Err(NavigationError::NotAuthenticated);
        }
        let id = screen.id();
        if !self.tree.registers(id) {
            tracing::warn!(screen = ?id, tree = ?self.tree, "refused navigation to unregistered screen");
            return Err(NavigationError::UnknownScreen {
                screen: id,
                tree: self.tree,
            });
        }

        match self.stack.iter().position(|open| open.id() == id) {
            Some(index) => {
                self.stack.truncate(index);
                self.stack.push(screen);
            }
            None => self.stack.push(screen),
        }
        Ok(())
    }

    /// Dispatches a menu press.
    pub fn navigate_to_entry(&mut self, entry: &RouteEntry) -> NavigationResult<()> {
        let screen = Screen::plain(entry.screen)
            .ok_or(NavigationError::MissingParameters(entry.screen))?;
        self.navigate(screen)
    }

    /// Pops the top screen. The dashboard is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn reset_to_dashboard(&mut self) {
        self.stack.truncate(1);
    }

    /// Drops screens the filtered menu no longer offers.
    ///
    /// The stack is cut at the first catalog screen missing from `menu`, so
    /// the user lands on the nearest screen still allowed, at worst the
    /// dashboard. Auxiliary screens are not menu entries and stay. Returns
    /// whether anything was dropped.
    pub fn retain_reachable(&mut self, menu: &[RouteEntry]) -> bool {
        let Some(role) = self.tree.role() else {
            return false;
        };
        let catalog = catalog_for(role);
        let hidden = |screen: &Screen| {
            let id = screen.id();
            catalog.iter().any(|entry| entry.screen == id)
                && !menu.iter().any(|entry| entry.screen == id)
        };
        match self.stack.iter().skip(1).position(hidden) {
            Some(index) => {
                let dropped = self.stack.split_off(index + 1);
                tracing::debug!(
                    tree = ?self.tree,
                    dropped = dropped.len(),
                    "closed screens hidden by the current menu"
                );
                true
            }
            None => false,
        }
    }
}
