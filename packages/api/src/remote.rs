//! Client-side collaborators backed by the server functions in this crate.
//!
//! [`RemoteStore`] and [`RemoteAuth`] let the `records` controllers run in the
//! browser unchanged: every trait call becomes one HTTP round-trip.

use records::{
    AdminSession, AuthError, Authenticator, DocumentStore, RecordId, StoreError, StudentFields,
    StudentRecord,
};

use dioxus::prelude::ServerFnError;

fn unavailable(e: ServerFnError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// The student collection, reached through the server.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RemoteStore;

impl DocumentStore for RemoteStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        crate::list_students().await.map_err(unavailable)
    }

    async fn insert(&self, fields: StudentFields) -> Result<RecordId, StoreError> {
        crate::add_student(fields).await.map_err(unavailable)
    }

    async fn replace(&self, id: &RecordId, fields: StudentFields) -> Result<(), StoreError> {
        match crate::update_student(id.clone(), fields).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::NotFound(id.clone())),
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        match crate::delete_student(id.clone()).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::NotFound(id.clone())),
            Err(e) => Err(unavailable(e)),
        }
    }
}

/// Admin sign-in through the server session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RemoteAuth;

impl Authenticator for RemoteAuth {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<AdminSession, AuthError> {
        match crate::login(identifier.to_string(), secret.to_string()).await {
            Ok(Some(admin)) => Ok(admin),
            Ok(None) => Err(AuthError::Rejected),
            Err(e) => Err(AuthError::Unavailable(e.to_string())),
        }
    }

    async fn end_session(&self) -> Result<(), AuthError> {
        crate::logout()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))
    }
}
