//! Wire models exchanged with the LMS backend.
//!
//! These models mirror the JSON payloads of the authentication endpoints. The
//! role is kept as the raw string the backend sends; canonicalization happens in
//! the client core, never here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl LoginPayload {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterInfo {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_center_assigned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_center_assignment: Option<bool>,
    #[serde(default)]
    pub center: Option<CenterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_backend_payload() {
        let raw = r#"{
            "access_token": "tok",
            "user": {
                "id": 7,
                "username": "admin1",
                "firstName": "Aziz",
                "lastName": "Karimov",
                "fullName": "Aziz Karimov",
                "role": "ADMIN",
                "center": {"id": 3, "name": "Center", "permissions": {"payments": false}}
            }
        }"#;
        let parsed: AuthResponse = serde_json::from_str(raw).expect("parse response");
        assert_eq!(parsed.access_token, "tok");
        assert_eq!(parsed.user.role.as_deref(), Some("ADMIN"));
        let center = parsed.user.center.expect("center");
        assert_eq!(center.permissions.expect("permissions").get("payments"), Some(&false));
    }

    #[test]
    fn missing_role_and_center_default_to_none() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id": 1, "username": "u"}"#).expect("parse user");
        assert!(user.role.is_none());
        assert!(user.center.is_none());
    }

    #[test]
    fn center_without_permissions_keeps_none() {
        let center: CenterInfo =
            serde_json::from_str(r#"{"id": 1, "name": "c"}"#).expect("parse center");
        assert!(center.permissions.is_none());
    }
}
