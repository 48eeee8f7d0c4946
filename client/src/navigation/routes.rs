//! Defines the per-role route catalogs.
//!
//! Each role has a fixed, ordered list of menu destinations. Order is the
//! display order, and the first entry is always the role's dashboard.

use super::screens::ScreenId;
use crate::auth::Role;
use serde::Serialize;

/// One navigable destination: a display title, the path used for capability
/// gating, and the screen the router opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouteEntry {
    pub title: &'static str,
    pub path: &'static str,
    pub screen: ScreenId,
}

const fn entry(title: &'static str, path: &'static str, screen: ScreenId) -> RouteEntry {
    RouteEntry {
        title,
        path,
        screen,
    }
}

pub static SUPER_ADMIN_ROUTES: [RouteEntry; 6] = [
    entry("Dashboard", "/account/superadmin", ScreenId::SuperAdminHome),
    entry("Mening fanlarim", "/account/subjects", ScreenId::Subjects),
    entry("Markazlar va foydalanuvchilar", "/account/center-users", ScreenId::CenterUsers),
    entry("Telegram Management", "/account/telegram", ScreenId::TelegramManagement),
    entry("Analytics", "/account/analytics", ScreenId::Analytics),
    entry("Logs", "/account/logs", ScreenId::Logs),
];

pub static CENTER_ADMIN_ROUTES: [RouteEntry; 9] = [
    entry("Dashboard", "/account/admin", ScreenId::AdminHome),
    entry("O'quvchilarim", "/account/students", ScreenId::Students),
    entry("O'qituvchilarim", "/account/teachers", ScreenId::Teachers),
    entry("Guruhlar", "/account/groups", ScreenId::MyGroups),
    entry("Natijalar", "/account/results", ScreenId::Results),
    entry("To'lovlar", "/account/payments", ScreenId::Payments),
    entry("Mening fanlarim", "/account/subjects", ScreenId::Subjects),
    entry("Telegram Management", "/account/telegram", ScreenId::TelegramManagement),
    entry("Foydalanish qo'llanmasi", "/account/guide", ScreenId::Guide),
];

pub static TEACHER_ROUTES: [RouteEntry; 13] = [
    entry("Dashboard", "/account/teacher", ScreenId::TeacherHome),
    entry("Imtihonlar", "/account/exams", ScreenId::Exams),
    entry("Mening guruhlarim", "/account/groups", ScreenId::MyGroups),
    entry("Davomat", "/account/attendance", ScreenId::Attendance),
    entry("Vazifalar", "/account/tasks", ScreenId::Tasks),
    entry("Natijalar", "/account/results", ScreenId::Results),
    entry("Vazifalar tarixi", "/account/tasks/history", ScreenId::TasksHistory),
    entry("To'lovlar", "/account/payments", ScreenId::Payments),
    entry("Mening fanlarim", "/account/subjects", ScreenId::Subjects),
    entry("Test generatsiya", "/account/test-generator", ScreenId::TestGenerator),
    entry("Yaratilgan testlar", "/account/generated-tests", ScreenId::GeneratedTests),
    entry("Skaner", "/account/scanner", ScreenId::Scanner),
    entry("Telegram Management", "/account/telegram", ScreenId::TelegramManagement),
];

pub static STUDENT_ROUTES: [RouteEntry; 4] = [
    entry("Dashboard", "/account/student", ScreenId::StudentHome),
    entry("Mening to'lovlarim", "/account/student-payments", ScreenId::StudentPayments),
    entry("Mening fanlarim", "/account/subjects", ScreenId::Subjects),
    entry("Telegram", "/account/telegram-user", ScreenId::TelegramUser),
];

pub fn catalog_for(role: Role) -> &'static [RouteEntry] {
    match role {
        Role::SuperAdmin => &SUPER_ADMIN_ROUTES,
        Role::Admin => &CENTER_ADMIN_ROUTES,
        Role::Teacher => &TEACHER_ROUTES,
        Role::Student => &STUDENT_ROUTES,
    }
}

pub fn dashboard_entry(role: Role) -> &'static RouteEntry {
    &catalog_for(role)[0]
}
