//! User-facing notification capability.
//!
//! The controllers report outcomes through [`Notifier`] and never decide how
//! a notice is presented. The web UI renders them as a dismissible banner.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}
