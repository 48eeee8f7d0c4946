use lms_adapters::{
    AuthUser, CenterInfo, CredentialStore, FileCredentialStore, InMemoryAuthBackend, LoginPayload,
    MemoryCredentialStore,
};
use lms_client::auth::AuthError;
use lms_client::navigation::{Screen, ScreenId};
use lms_client::{DashboardService, Navigator, Role, RootTree, SessionManager};
use std::collections::BTreeMap;
use std::sync::Arc;

fn account(username: &str, role: Option<&str>, permissions: Option<Vec<(&str, bool)>>) -> AuthUser {
    AuthUser {
        id: 100,
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "Account".to_string(),
        full_name: "Test Account".to_string(),
        role: role.map(str::to_string),
        has_center_assigned: Some(true),
        needs_center_assignment: Some(false),
        center: Some(CenterInfo {
            id: 1,
            name: "Main center".to_string(),
            permissions: permissions.map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect::<BTreeMap<_, _>>()
            }),
        }),
    }
}

fn screens(entries: &[lms_client::RouteEntry]) -> Vec<ScreenId> {
    entries.iter().map(|entry| entry.screen).collect()
}

#[tokio::test]
async fn teacher_session_end_to_end() {
    let backend = Arc::new(InMemoryAuthBackend::new());
    backend
        .add_account(
            "pw",
            account("teacher1", Some("teacher"), Some(vec![("scanner", false), ("checking", false)])),
        )
        .await;
    let store = Arc::new(MemoryCredentialStore::new());
    let sessions = SessionManager::new(backend.clone(), store.clone());

    let mut navigator = Navigator::for_session(None);
    assert_eq!(navigator.tree(), RootTree::Login);

    let session = sessions
        .login(&LoginPayload::new("teacher1", "pw"))
        .await
        .expect("login");
    navigator.remount(Some(&*session));
    assert_eq!(navigator.tree(), RootTree::Teacher);

    let mut dashboard = DashboardService::new(session.clone());
    let menu = dashboard.menu();
    assert_eq!(menu.len(), 12);
    assert!(!screens(&menu).contains(&ScreenId::Scanner));

    let attendance = menu
        .iter()
        .find(|entry| entry.screen == ScreenId::Attendance)
        .expect("attendance entry");
    dashboard.press(&mut navigator, attendance).expect("open attendance");
    assert_eq!(navigator.current(), Some(&Screen::Attendance));

    // The center switches attendance off; reloading publishes a new snapshot.
    backend
        .update_user(account(
            "teacher1",
            Some("teacher"),
            Some(vec![("checking", false), ("attendance", false)]),
        ))
        .await
        .expect("update user");
    let refreshed = sessions.reload_user().await.expect("reload");
    dashboard.set_session(refreshed.clone());
    navigator.remount(Some(&*refreshed));
    assert_eq!(navigator.tree(), RootTree::Teacher);
    assert!(navigator.retain_reachable(&dashboard.menu()));
    assert_eq!(navigator.current(), Some(&Screen::TeacherHome));

    let menu = dashboard.menu();
    assert!(!screens(&menu).contains(&ScreenId::Attendance));
    assert_eq!(menu.len(), 11);
    assert_eq!(menu[0].screen, ScreenId::TeacherHome);
    assert_eq!(dashboard.cache().misses(), 2);

    // Token revoked upstream: the next authorized call ends the session.
    backend.revoke_token(refreshed.token()).await;
    let err = sessions.reload_user().await.expect_err("expired");
    assert!(matches!(err, AuthError::SessionExpired));
    assert!(sessions.current().await.is_none());
    assert!(store.token().await.expect("token").is_none());

    navigator.remount(sessions.current().await.as_deref());
    assert_eq!(navigator.tree(), RootTree::Login);
    assert!(navigator.current().is_none());
}

#[tokio::test]
async fn unknown_role_falls_back_to_teacher_tree() {
    let backend = Arc::new(InMemoryAuthBackend::new());
    backend
        .add_account("pw", account("mystery", Some("moderator"), None))
        .await;
    let sessions = SessionManager::new(backend, Arc::new(MemoryCredentialStore::new()));

    let session = sessions
        .login(&LoginPayload::new("mystery", "pw"))
        .await
        .expect("login");
    assert_eq!(session.role(), Role::Teacher);
    assert_eq!(Navigator::for_session(Some(&*session)).tree(), RootTree::Teacher);
    assert_eq!(DashboardService::new(session).menu().len(), 13);
}

#[tokio::test]
async fn session_survives_restart_through_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("credentials.json");
    let backend = Arc::new(InMemoryAuthBackend::new());
    backend
        .add_account("pw", account("admin1", Some("ADMIN"), Some(vec![("payments", false)])))
        .await;

    {
        let sessions =
            SessionManager::new(backend.clone(), Arc::new(FileCredentialStore::new(&path)));
        sessions
            .login(&LoginPayload::new("admin1", "pw"))
            .await
            .expect("login");
    }

    let sessions = SessionManager::new(backend, Arc::new(FileCredentialStore::new(&path)));
    let session = sessions
        .restore()
        .await
        .expect("restore")
        .expect("stored session");
    assert_eq!(session.role(), Role::Admin);

    let view = DashboardService::new(session).view();
    assert_eq!(view.tree, RootTree::Admin);
    assert!(!screens(&view.entries).contains(&ScreenId::Payments));
    assert_eq!(view.entries.len(), 8);

    sessions.logout().await.expect("logout");
    assert!(sessions.restore().await.expect("restore").is_none());
}

#[tokio::test]
async fn student_without_loaded_capabilities_sees_full_catalog() {
    let backend = Arc::new(InMemoryAuthBackend::new());
    backend
        .add_account("pw", account("student1", Some("STUDENT"), None))
        .await;
    let sessions = SessionManager::new(backend, Arc::new(MemoryCredentialStore::new()));
    let session = sessions
        .login(&LoginPayload::new("student1", "pw"))
        .await
        .expect("login");

    let mut navigator = Navigator::for_session(Some(&*session));
    let mut dashboard = DashboardService::new(session);
    let menu = dashboard.menu();
    assert_eq!(
        screens(&menu),
        vec![
            ScreenId::StudentHome,
            ScreenId::StudentPayments,
            ScreenId::Subjects,
            ScreenId::TelegramUser,
        ]
    );
    for entry in menu.iter() {
        dashboard.press(&mut navigator, entry).expect("reachable");
    }
    assert!(navigator.navigate(Screen::Profile).is_ok());
    assert!(navigator.navigate(Screen::EditGroup { group_id: 1 }).is_err());
}
