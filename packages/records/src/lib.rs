//! Platform-agnostic core of Rollcall: the student record model, form drafts,
//! validation, duplicate detection, the document-store contract, and the
//! view-state controllers the UI drives.

pub mod collection;
pub mod config;
pub mod draft;
pub mod duplicate;
pub mod gate;
pub mod manager;
pub mod models;
pub mod notify;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

pub use collection::{DocumentStore, StoreError};
pub use config::RollcallConfig;
pub use draft::{Field, StudentDraft};
pub use duplicate::{find_conflict, Conflict};
pub use gate::{AdminSession, AuthError, Authenticator, GateOutcome, SessionGate};
pub use manager::{DeleteOutcome, RecordManager, Row, SubmitOutcome, ViewState};
pub use models::{Gender, RecordId, StudentFields, StudentRecord};
pub use notify::{NoticeKind, Notifier};
pub use validate::{validate, ValidationError};
