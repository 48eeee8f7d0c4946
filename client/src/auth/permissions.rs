//! Center capability gate for navigation paths.
//!
//! Maps a route path to the capability key it requires and evaluates that key
//! against a center's capability map. Rules are an ordered prefix table
//! evaluated first-match-wins; paths no rule matches are always visible.

use super::models::{CapabilityKey, CapabilityMap};

/// Mount point of the account area; gate prefixes are relative to it.
pub const ACCOUNT_ROOT: &str = "/account";

/// Ordered (prefix, capability) rules.
pub const GATE_RULES: &[(&str, CapabilityKey)] = &[
    ("/exams", CapabilityKey::Exams),
    ("/attendance", CapabilityKey::Attendance),
    ("/test-generator", CapabilityKey::TestGeneration),
    ("/generated-tests", CapabilityKey::TestGeneration),
    ("/scanner", CapabilityKey::Checking),
    ("/telegram", CapabilityKey::TelegramIntegration),
    ("/tasks", CapabilityKey::Tasks),
    ("/payments", CapabilityKey::Payments),
    ("/student-payments", CapabilityKey::Payments),
    ("/results", CapabilityKey::ReportsTests),
];

/// Strips the account root so `/account/exams` and `/exams` gate alike.
fn relative_path(path: &str) -> &str {
    match path.strip_prefix(ACCOUNT_ROOT) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Capability a path requires, if any rule matches it.
pub fn required_capability(path: &str) -> Option<CapabilityKey> {
    let relative = relative_path(path);
    GATE_RULES
        .iter()
        .find(|(prefix, _)| relative.starts_with(prefix))
        .map(|(_, key)| *key)
}

/// Decides whether a path is visible for a center.
///
/// Super admins bypass gating entirely. Otherwise the gate fails open: an
/// unmatched path, a map that has not been loaded, or a key missing from the
/// map all count as visible. Only an explicit `false` hides the path.
pub fn is_visible(path: &str, capabilities: Option<&CapabilityMap>, is_super_admin: bool) -> bool {
    if is_super_admin {
        return true;
    }
    let Some(key) = required_capability(path) else {
        return true;
    };
    match capabilities {
        Some(map) => !map.is_disabled(key),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_capability_matches_prefixes() {
        assert_eq!(required_capability("/exams"), Some(CapabilityKey::Exams));
        assert_eq!(required_capability("/account/exams"), Some(CapabilityKey::Exams));
        assert_eq!(
            required_capability("/account/tasks/history"),
            Some(CapabilityKey::Tasks)
        );
        assert_eq!(
            required_capability("/account/telegram-user"),
            Some(CapabilityKey::TelegramIntegration)
        );
        assert_eq!(
            required_capability("/account/student-payments"),
            Some(CapabilityKey::Payments)
        );
        assert_eq!(
            required_capability("/account/generated-tests"),
            Some(CapabilityKey::TestGeneration)
        );
        assert_eq!(required_capability("/account/results"), Some(CapabilityKey::ReportsTests));
    }

    #[test]
    fn ungated_paths_have_no_capability() {
        for path in [
            "/account/teacher",
            "/account/student",
            "/account/subjects",
            "/account/groups",
            "/account/guide",
            "/account",
            "",
        ] {
            assert_eq!(required_capability(path), None, "{path}");
        }
    }

    #[test]
    fn account_root_is_only_stripped_at_a_segment_boundary() {
        assert_eq!(required_capability("/accountexams"), None);
    }

    #[test]
    fn gated_prefix_truth_table() {
        for (prefix, key) in GATE_RULES {
            let off = CapabilityMap::new().with(*key, false);
            let on = CapabilityMap::new().with(*key, true);
            let empty = CapabilityMap::new();
            assert!(!is_visible(prefix, Some(&off), false), "{prefix} off");
            assert!(is_visible(prefix, Some(&on), false), "{prefix} on");
            assert!(is_visible(prefix, None, false), "{prefix} unloaded");
            assert!(is_visible(prefix, Some(&empty), false), "{prefix} absent key");
        }
    }

    #[test]
    fn super_admin_bypasses_everything() {
        let all_off: CapabilityMap = CapabilityKey::ALL.into_iter().map(|key| (key, false)).collect();
        for (prefix, _) in GATE_RULES {
            assert!(is_visible(prefix, Some(&all_off), true));
        }
        assert!(is_visible("/anything", None, true));
    }

    #[test]
    fn unrelated_keys_do_not_hide() {
        let map = CapabilityMap::new().with(CapabilityKey::Payments, false);
        assert!(is_visible("/account/exams", Some(&map), false));
        assert!(is_visible("/account/subjects", Some(&map), false));
    }
}
