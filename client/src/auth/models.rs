//! Data structures for authentication-related entities.
//!
//! This module defines the canonical user role, the closed set of center
//! capability keys, the capability map, and the user record the rest of the
//! client works with once a backend payload has been normalized.

use lms_adapters::{AuthUser, CenterInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Canonical authorization tier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[serde(rename = "SUPERADMIN")]
    SuperAdmin,
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Resolves a raw backend role value into a canonical role.
    ///
    /// Total: anything unrecognized, including a missing or empty value, falls
    /// back to [`Role::Teacher`] and emits a warning so the fallback is visible.
    pub fn resolve(raw: Option<&str>) -> Role {
        let normalized = raw.map(str::to_uppercase).unwrap_or_default();
        match normalized.as_str() {
            "STUDENT" => Role::Student,
            "SUPERADMIN" | "SUPER_ADMIN" => Role::SuperAdmin,
            "ADMIN" => Role::Admin,
            "TEACHER" => Role::Teacher,
            _ => {
                tracing::warn!(raw_role = ?raw, "unrecognized role, falling back to teacher");
                Role::Teacher
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPERADMIN",
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }

    pub fn is_super_admin(self) -> bool {
        self == Role::SuperAdmin
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature flag a center can switch on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKey {
    Tests,
    Exams,
    TestGeneration,
    Checking,
    TelegramIntegration,
    Attendance,
    AttendanceTelegramNotifications,
    Tasks,
    TasksTelegramNotifications,
    Payments,
    PaymentsTelegramNotifications,
    ReportsStudents,
    ReportsTests,
    ReportsAttendance,
    ReportsPayments,
}

impl CapabilityKey {
    pub const ALL: [CapabilityKey; 15] = [
        CapabilityKey::Tests,
        CapabilityKey::Exams,
        CapabilityKey::TestGeneration,
        CapabilityKey::Checking,
        CapabilityKey::TelegramIntegration,
        CapabilityKey::Attendance,
        CapabilityKey::AttendanceTelegramNotifications,
        CapabilityKey::Tasks,
        CapabilityKey::TasksTelegramNotifications,
        CapabilityKey::Payments,
        CapabilityKey::PaymentsTelegramNotifications,
        CapabilityKey::ReportsStudents,
        CapabilityKey::ReportsTests,
        CapabilityKey::ReportsAttendance,
        CapabilityKey::ReportsPayments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityKey::Tests => "tests",
            CapabilityKey::Exams => "exams",
            CapabilityKey::TestGeneration => "test_generation",
            CapabilityKey::Checking => "checking",
            CapabilityKey::TelegramIntegration => "telegram_integration",
            CapabilityKey::Attendance => "attendance",
            CapabilityKey::AttendanceTelegramNotifications => "attendance_telegram_notifications",
            CapabilityKey::Tasks => "tasks",
            CapabilityKey::TasksTelegramNotifications => "tasks_telegram_notifications",
            CapabilityKey::Payments => "payments",
            CapabilityKey::PaymentsTelegramNotifications => "payments_telegram_notifications",
            CapabilityKey::ReportsStudents => "reports_students",
            CapabilityKey::ReportsTests => "reports_tests",
            CapabilityKey::ReportsAttendance => "reports_attendance",
            CapabilityKey::ReportsPayments => "reports_payments",
        }
    }
}

impl std::fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown capability key: {0}")]
pub struct CapabilityKeyParseError(pub String);

impl std::str::FromStr for CapabilityKey {
    type Err = CapabilityKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CapabilityKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| CapabilityKeyParseError(value.to_string()))
    }
}

/// Center capability flags as delivered by the backend.
///
/// Keys the client does not know about are kept as-is. Only an explicit
/// `false` turns a capability off; see [`CapabilityMap::is_disabled`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityMap(BTreeMap<String, bool>);

impl CapabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CapabilityKey) -> Option<bool> {
        self.0.get(key.as_str()).copied()
    }

    pub fn is_disabled(&self, key: CapabilityKey) -> bool {
        self.get(key) == Some(false)
    }

    pub fn with(mut self, key: CapabilityKey, enabled: bool) -> Self {
        self.0.insert(key.as_str().to_string(), enabled);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, bool>> for CapabilityMap {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self(map)
    }
}

impl FromIterator<(CapabilityKey, bool)> for CapabilityMap {
    fn from_iter<I: IntoIterator<Item = (CapabilityKey, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, enabled)| (key.as_str().to_string(), enabled))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Center {
    pub id: i64,
    pub name: String,
    /// `None` until the backend has delivered the center's flags.
    pub permissions: Option<Arc<CapabilityMap>>,
}

impl From<CenterInfo> for Center {
    fn from(info: CenterInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            permissions: info.permissions.map(|map| Arc::new(CapabilityMap::from(map))),
        }
    }
}

/// Authenticated user with the role already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub center: Option<Center>,
}

impl User {
    pub fn capabilities(&self) -> Option<&Arc<CapabilityMap>> {
        self.center.as_ref().and_then(|center| center.permissions.as_ref())
    }
}

impl From<AuthUser> for User {
    fn from(user: AuthUser) -> Self {
        let role = Role::resolve(user.role.as_deref());
        let display_name = if user.full_name.trim().is_empty() {
            format!("{} {}", user.first_name, user.last_name).trim().to_string()
        } else {
            user.full_name
        };
        Self {
            id: user.id,
            username: user.username,
            display_name,
            role,
            center: user.center.map(Center::from),
        }
    }
}
