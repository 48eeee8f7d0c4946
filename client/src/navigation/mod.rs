//! Role-gated navigation for the client.
//!
//! Route catalogs per role, the permission-filtered menu built from them, and
//! the router that turns menu presses into screen transitions.

pub mod errors;
pub mod menu;
pub mod router;
pub mod routes;
pub mod screens;

pub use errors::{NavigationError, NavigationResult};
pub use menu::{filter_menu, MenuCache};
pub use router::{Navigator, RootTree};
pub use routes::{catalog_for, dashboard_entry, RouteEntry};
pub use screens::{Screen, ScreenId};
