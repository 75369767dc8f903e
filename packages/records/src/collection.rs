//! # Document store contract
//!
//! Persistence is an external collaborator. [`DocumentStore`] is the whole of
//! what Rollcall needs from it, over a single collection of student
//! documents:
//!
//! | Method | Contract |
//! |--------|----------|
//! | [`list_all`](DocumentStore::list_all) | Every document, in the store's own order. |
//! | [`insert`](DocumentStore::insert) | Adds a document and returns the id the store assigned. |
//! | [`replace`](DocumentStore::replace) | Overwrites the whole document body. Fails with [`StoreError::NotFound`] for an unknown id. |
//! | [`delete`](DocumentStore::delete) | Removes the document. Fails with [`StoreError::NotFound`] for an unknown id. |
//!
//! Implementations: [`crate::MemoryStore`] (in-process), the server-function
//! client in the `api` crate, and the Postgres store behind it.

use std::future::Future;

use crate::models::{RecordId, StudentFields, StudentRecord};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no student with id {0}")]
    NotFound(RecordId),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Async access to the student collection.
pub trait DocumentStore {
    fn list_all(&self) -> impl Future<Output = Result<Vec<StudentRecord>, StoreError>>;
    fn insert(
        &self,
        fields: StudentFields,
    ) -> impl Future<Output = Result<RecordId, StoreError>>;
    fn replace(
        &self,
        id: &RecordId,
        fields: StudentFields,
    ) -> impl Future<Output = Result<(), StoreError>>;
    fn delete(&self, id: &RecordId) -> impl Future<Output = Result<(), StoreError>>;
}
