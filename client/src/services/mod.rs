//! Module for client-side services.
//!
//! This module encapsulates services that orchestrate the session and the
//! navigation core on behalf of the screens, such as building the dashboard
//! menu for the current session.

pub mod dashboard;

pub use dashboard::{DashboardService, MenuView};
