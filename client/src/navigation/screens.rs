//! Screen identifiers known to the navigation layer.
//!
//! `ScreenId` is the parameter-free token carried by route entries; `Screen` is
//! what actually sits on a navigation stack and carries per-visit parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    TeacherHome,
    AdminHome,
    SuperAdminHome,
    StudentHome,
    Profile,
    MyGroups,
    EditGroup,
    Payments,
    Attendance,
    Tasks,
    TasksHistory,
    Students,
    Teachers,
    Guide,
    Subjects,
    Results,
    TelegramManagement,
    TelegramUser,
    Exams,
    TestGenerator,
    GeneratedTests,
    Scanner,
    StudentPayments,
    CenterUsers,
    Analytics,
    Logs,
}

impl ScreenId {
    pub fn is_dashboard(self) -> bool {
        matches!(
            self,
            ScreenId::TeacherHome
                | ScreenId::AdminHome
                | ScreenId::SuperAdminHome
                | ScreenId::StudentHome
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    TeacherHome,
    AdminHome,
    SuperAdminHome,
    StudentHome,
    Profile,
    MyGroups,
    EditGroup { group_id: i64 },
    Payments,
    Attendance,
    Tasks {
        group_id: Option<i64>,
        date: Option<String>,
    },
    TasksHistory,
    Students,
    Teachers,
    Guide,
    Subjects,
    Results,
    TelegramManagement,
    TelegramUser,
    Exams,
    TestGenerator,
    GeneratedTests,
    Scanner,
    StudentPayments,
    CenterUsers,
    Analytics,
    Logs,
}

impl Screen {
    /// Builds the screen for an identifier that needs no parameters.
    ///
    /// Returns `None` for `EditGroup`, which cannot be opened without a group.
    pub fn plain(id: ScreenId) -> Option<Screen> {
        let screen = match id {
            ScreenId::TeacherHome => Screen::TeacherHome,
            ScreenId::AdminHome => Screen::AdminHome,
            ScreenId::SuperAdminHome => Screen::SuperAdminHome,
            ScreenId::StudentHome => Screen::StudentHome,
            ScreenId::Profile => Screen::Profile,
            ScreenId::MyGroups => Screen::MyGroups,
            ScreenId::EditGroup => return None,
            ScreenId::Payments => Screen::Payments,
            ScreenId::Attendance => Screen::Attendance,
            ScreenId::Tasks => Screen::Tasks {
                group_id: None,
                date: None,
            },
            ScreenId::TasksHistory => Screen::TasksHistory,
            ScreenId::Students => Screen::Students,
            ScreenId::Teachers => Screen::Teachers,
            ScreenId::Guide => Screen::Guide,
            ScreenId::Subjects => Screen::Subjects,
            ScreenId::Results => Screen::Results,
            ScreenId::TelegramManagement => Screen::TelegramManagement,
            ScreenId::TelegramUser => Screen::TelegramUser,
            ScreenId::Exams => Screen::Exams,
            ScreenId::TestGenerator => Screen::TestGenerator,
            ScreenId::GeneratedTests => Screen::GeneratedTests,
            ScreenId::Scanner => Screen::Scanner,
            ScreenId::StudentPayments => Screen::StudentPayments,
            ScreenId::CenterUsers => Screen::CenterUsers,
            ScreenId::Analytics => Screen::Analytics,
            ScreenId::Logs => Screen::Logs,
        };
        Some(screen)
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::TeacherHome => ScreenId::TeacherHome,
            Screen::AdminHome => ScreenId::AdminHome,
            Screen::SuperAdminHome => ScreenId::SuperAdminHome,
            Screen::StudentHome => ScreenId::StudentHome,
            Screen::Profile => ScreenId::Profile,
            Screen::MyGroups => ScreenId::MyGroups,
            Screen::EditGroup { .. } => ScreenId::EditGroup,
            Screen::Payments => ScreenId::Payments,
            Screen::Attendance => ScreenId::Attendance,
            Screen::Tasks { .. } => ScreenId::Tasks,
            Screen::TasksHistory => ScreenId::TasksHistory,
            Screen::Students => ScreenId::Students,
            Screen::Teachers => ScreenId::Teachers,
            Screen::Guide => ScreenId::Guide,
            Screen::Subjects => ScreenId::Subjects,
            Screen::Results => ScreenId::Results,
            Screen::TelegramManagement => ScreenId::TelegramManagement,
            Screen::TelegramUser => ScreenId::TelegramUser,
            Screen::Exams => ScreenId::Exams,
            Screen::TestGenerator => ScreenId::TestGenerator,
            Screen::GeneratedTests => ScreenId::GeneratedTests,
            Screen::Scanner => ScreenId::Scanner,
            Screen::StudentPayments => ScreenId::StudentPayments,
            Screen::CenterUsers => ScreenId::CenterUsers,
            Screen::Analytics => ScreenId::Analytics,
            Screen::Logs => ScreenId::Logs,
        }
    }
}
