//! This crate contains all shared UI for the workspace.

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

pub mod notices;
pub use notices::{use_notices, NoticeProvider, Notices, UiNotifier};

mod notice_banner;
pub use notice_banner::NoticeBanner;

mod login_form;
pub use login_form::LoginForm;

mod sidebar;
pub use sidebar::Sidebar;

mod student_table;
pub use student_table::StudentTable;

mod student_form;
pub use student_form::StudentFormDialog;
