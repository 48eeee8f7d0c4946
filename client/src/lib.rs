//! LMS mobile client core.
//!
//! Resolves the signed-in user's role, picks that role's route catalog, filters
//! it by the center's capability flags (keeping the dashboard reachable), and
//! drives the screen stack. The session lifecycle around it talks to the
//! backend and local storage through the `lms-adapters` traits.

pub mod auth;
pub mod config;
pub mod errors;
pub mod navigation;
pub mod observability;
pub mod services;

pub use auth::{CapabilityKey, CapabilityMap, Role, Session, SessionManager, User};
pub use errors::{ClientError, ClientResult};
pub use navigation::{filter_menu, Navigator, RootTree, RouteEntry};
pub use services::{DashboardService, MenuView};
