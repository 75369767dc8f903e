//! # Record Manager — the student list and its overlays
//!
//! [`RecordManager`] owns the whole view state of the students page in one
//! explicit [`ViewState`] and drives the [`DocumentStore`] and [`Notifier`]
//! collaborators. The UI renders from [`RecordManager::state`] and calls the
//! operations below in response to clicks.
//!
//! ## Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`load`](RecordManager::load) | Replace the in-memory list with a fresh `list_all`. |
//! | [`open_create`](RecordManager::open_create) / [`open_edit`](RecordManager::open_edit) | Show the form with an empty or pre-filled draft. |
//! | [`cancel_form`](RecordManager::cancel_form) | Hide the form and discard the draft. Never touches the store. |
//! | [`submit`](RecordManager::submit) | Validate, re-fetch, duplicate scan, then insert or replace. |
//! | [`view`](RecordManager::view) / [`close_view`](RecordManager::close_view) | Read-only detail overlay. |
//! | [`request_delete`](RecordManager::request_delete) / [`cancel_delete`](RecordManager::cancel_delete) / [`confirm_delete`](RecordManager::confirm_delete) | Delete behind a confirmation. |
//! | [`sign_out`](RecordManager::sign_out) | End the session and drop all view state. |
//!
//! Every mutation waits for the store round-trip and a full re-fetch; there
//! are no optimistic updates and no retries.
//!
//! The UI runs the async operations on a clone so the live manager stays
//! responsive while the store is awaited. [`finish_load`](RecordManager::finish_load),
//! [`finish_submit`](RecordManager::finish_submit) and
//! [`finish_delete`](RecordManager::finish_delete) fold the clone's results back
//! in without undoing anything done in the meantime.

use crate::collection::{DocumentStore, StoreError};
use crate::config::RollcallConfig;
use crate::draft::{Field, StudentDraft};
use crate::duplicate::{find_conflict, Conflict, DUPLICATE_MESSAGE};
use crate::gate::{AuthError, Authenticator};
use crate::models::{RecordId, StudentFields, StudentRecord};
use crate::notify::{NoticeKind, Notifier};
use crate::validate::{validate, ValidationError};

pub const STUDENT_ADDED: &str = "Student added successfully!";
pub const STUDENT_UPDATED: &str = "Student updated successfully!";
pub const STUDENT_DELETED: &str = "Student deleted successfully!";
pub const SAVE_FAILED: &str = "An error occurred while saving the data. Please try again.";
pub const DELETE_FAILED: &str = "An error occurred while deleting the student. Please try again.";
pub const LOAD_FAILED: &str = "Could not load the student list. Please refresh the page.";
pub const SIGN_OUT_FAILED: &str = "An error occurred while signing out. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Last fetched snapshot, in store order.
    pub records: Vec<StudentRecord>,
    pub draft: StudentDraft,
    /// Id of the record the form is editing; `None` in create mode.
    pub editing: Option<RecordId>,
    pub form_open: bool,
    /// Record shown in the detail overlay.
    pub detail: Option<StudentRecord>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<StudentRecord>,
    /// A store round-trip is in flight.
    pub busy: bool,
}

/// One line of the student table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// 1-based position in the list. Display only; not the record id.
    pub position: usize,
    pub id: RecordId,
    pub name: String,
    pub class: String,
    pub section: String,
    pub roll_number: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Duplicate(Conflict),
    Created(RecordId),
    Updated(RecordId),
    Failed(StoreError),
}

impl SubmitOutcome {
    /// The write went through and the form should close.
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted(RecordId),
    Failed(StoreError),
    NothingPending,
}

#[derive(Clone, Debug)]
pub struct RecordManager<S, N> {
    store: S,
    notifier: N,
    placeholder: String,
    state: ViewState,
}

impl<S, N> RecordManager<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_config(store, notifier, &RollcallConfig::default())
    }

    pub fn with_config(store: S, notifier: N, config: &RollcallConfig) -> Self {
        Self {
            store,
            notifier,
            placeholder: config.display.placeholder.clone(),
            state: ViewState::default(),
        }
    }

    /// Take display settings that arrived after construction.
    pub fn apply_config(&mut self, config: &RollcallConfig) {
        self.placeholder = config.display.placeholder.clone();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing.is_some()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.state
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| Row {
                position: index + 1,
                id: record.id.clone(),
                name: record.full_name(),
                class: record.fields.class.clone(),
                section: record.fields.section.clone(),
                roll_number: record.fields.roll_number.clone(),
            })
            .collect()
    }

    pub fn open_create(&mut self) {
        self.state.draft = StudentDraft::default();
        self.state.editing = None;
        self.state.form_open = true;
    }

    pub fn open_edit(&mut self, record: &StudentRecord) {
        self.state.draft = StudentDraft::from_fields(&record.fields);
        self.state.editing = Some(record.id.clone());
        self.state.form_open = true;
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.draft.set(field, value);
    }

    /// Close the form and reset the draft, in either mode.
    pub fn cancel_form(&mut self) {
        self.state.form_open = false;
        self.state.editing = None;
        self.state.draft = StudentDraft::default();
    }

    pub fn view(&mut self, record: &StudentRecord) {
        self.state.detail = Some(record.clone());
    }

    pub fn close_view(&mut self) {
        self.state.detail = None;
    }

    /// Label/value pairs for the detail overlay, with the placeholder for
    /// any field the record lacks.
    pub fn detail_entries(&self) -> Vec<(&'static str, String)> {
        let Some(record) = &self.state.detail else {
            return Vec::new();
        };
        Field::ALL
            .iter()
            .map(|&field| {
                let value = record
                    .fields
                    .value_of(field)
                    .unwrap_or_else(|| self.placeholder.clone());
                (field.label(), value)
            })
            .collect()
    }

    pub fn request_delete(&mut self, record: &StudentRecord) {
        self.state.pending_delete = Some(record.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.state.pending_delete = None;
    }

    /// Adopt the list fetched by `finished`.
    pub fn finish_load(&mut self, finished: &Self) {
        self.state.records = finished.state.records.clone();
    }

    /// Adopt the list from a submit run on `finished`, and close the form
    /// only if the write went through. A form closed meanwhile stays closed.
    pub fn finish_submit(&mut self, finished: &Self, outcome: &SubmitOutcome) {
        self.finish_load(finished);
        if outcome.is_saved() {
            self.cancel_form();
        }
    }

    /// Adopt the list from a delete of `target` run on `finished`, and close
    /// the confirmation if it still names that record.
    pub fn finish_delete(&mut self, finished: &Self, target: &RecordId) {
        self.finish_load(finished);
        if self
            .state
            .pending_delete
            .as_ref()
            .is_some_and(|r| &r.id == target)
        {
            self.state.pending_delete = None;
        }
    }
}

impl<S: DocumentStore, N: Notifier> RecordManager<S, N> {
    /// Fetch the full collection, replacing the in-memory list.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        match self.store.list_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded students");
                self.state.records = records;
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to load students: {e}");
                self.notifier.notify(NoticeKind::Error, LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// Re-fetch after a successful write. The write already happened, so a
    /// failure here only leaves the list stale.
    async fn refresh(&mut self) {
        match self.store.list_all().await {
            Ok(records) => self.state.records = records,
            Err(e) => tracing::warn!("failed to refresh students: {e}"),
        }
    }

    /// Validate the draft and write it.
    ///
    /// The form stays open on every failure so the draft can be corrected.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let fields = match validate(&self.state.draft) {
            Ok(fields) => fields,
            Err(e) => {
                self.notifier.notify(NoticeKind::Error, &e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        self.state.busy = true;
        let outcome = self.write(fields).await;
        self.state.busy = false;
        outcome
    }

    async fn write(&mut self, fields: StudentFields) -> SubmitOutcome {
        let existing = match self.store.list_all().await {
            Ok(records) => records,
            Err(e) => return self.save_failed(e),
        };
        if let Some(conflict) = find_conflict(&existing, &fields, self.state.editing.as_ref()) {
            tracing::debug!(?conflict, "duplicate student rejected");
            self.notifier.notify(NoticeKind::Error, DUPLICATE_MESSAGE);
            return SubmitOutcome::Duplicate(conflict);
        }

        let outcome = match self.state.editing.clone() {
            Some(id) => match self.store.replace(&id, fields).await {
                Ok(()) => {
                    tracing::info!(%id, "student updated");
                    self.notifier.notify(NoticeKind::Success, STUDENT_UPDATED);
                    SubmitOutcome::Updated(id)
                }
                Err(e) => return self.save_failed(e),
            },
            None => match self.store.insert(fields).await {
                Ok(id) => {
                    tracing::info!(%id, "student added");
                    self.notifier.notify(NoticeKind::Success, STUDENT_ADDED);
                    SubmitOutcome::Created(id)
                }
                Err(e) => return self.save_failed(e),
            },
        };

        self.refresh().await;
        self.cancel_form();
        outcome
    }

    fn save_failed(&self, error: StoreError) -> SubmitOutcome {
        tracing::error!("error adding/updating student: {error}");
        self.notifier.notify(NoticeKind::Error, SAVE_FAILED);
        SubmitOutcome::Failed(error)
    }

    /// Delete the pending record. The confirmation closes whatever the outcome.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let Some(target) = self.state.pending_delete.take() else {
            return DeleteOutcome::NothingPending;
        };

        self.state.busy = true;
        let outcome = match self.store.delete(&target.id).await {
            Ok(()) => {
                tracing::info!(id = %target.id, "student deleted");
                self.notifier.notify(NoticeKind::Success, STUDENT_DELETED);
                self.refresh().await;
                DeleteOutcome::Deleted(target.id)
            }
            Err(e) => {
                tracing::error!(id = %target.id, "error deleting student: {e}");
                self.notifier.notify(NoticeKind::Error, DELETE_FAILED);
                DeleteOutcome::Failed(e)
            }
        };
        self.state.busy = false;
        outcome
    }

    /// End the session. View state is dropped only once the provider confirms.
    pub async fn sign_out<A: Authenticator>(&mut self, auth: &A) -> Result<(), AuthError> {
        if let Err(e) = auth.end_session().await {
            tracing::warn!("sign-out failed: {e}");
            self.notifier.notify(NoticeKind::Error, SIGN_OUT_FAILED);
            return Err(e);
        }
        self.state = ViewState::default();
        Ok(())
    }
}
