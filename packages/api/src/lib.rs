//! # API crate — fullstack server functions for Rollcall
//!
//! Defines every Dioxus server function the web frontend calls, the
//! server-only collaborators behind them, and the client adapters that plug
//! those functions into the `records` controllers.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Admin credential check (Argon2) and session helpers |
//! | [`db`] | `server` | PostgreSQL pool and the [`db::PgStudentStore`] document store |
//! | [`settings`] | `server` | `rollcall.toml` loading |
//! | [`remote`] | — | [`RemoteStore`] / [`RemoteAuth`]: `records` collaborator traits over server functions |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with full server logic (behind `#[cfg(feature = "server")]`)
//! and once as a thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_admin`, `login`, `logout`
//! - **Students**: `list_students`, `add_student`, `update_student`, `delete_student`
//! - **Settings**: `get_config`
//!
//! Student functions require a signed-in admin. `update_student` and
//! `delete_student` return `false` when the id names no document.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod remote;
#[cfg(feature = "server")]
pub mod settings;

pub use records::{AdminSession, RecordId, RollcallConfig, StudentFields, StudentRecord};
pub use remote::{RemoteAuth, RemoteStore};

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

#[cfg(feature = "server")]
async fn require_admin(session: &tower_sessions::Session) -> Result<AdminSession, ServerFnError> {
    auth::current_admin(session)
        .await
        .map_err(server_error)?
        .ok_or_else(|| ServerFnError::new("Not signed in"))
}

/// Get the signed-in admin from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_admin() -> Result<Option<AdminSession>, ServerFnError> {
    auth::current_admin(&session).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_admin() -> Result<Option<AdminSession>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password. `Ok(None)` means the credentials were rejected.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<Option<AdminSession>, ServerFnError> {
    let credentials = auth::AdminCredentials::from_env().map_err(server_error)?;

    let Some(admin) = credentials.verify(&email, &password).map_err(server_error)? else {
        tracing::info!("rejected sign-in attempt");
        return Ok(None);
    };

    auth::sign_in(&session, &admin).await.map_err(server_error)?;
    tracing::info!(email = %admin.email, "admin signed in");
    Ok(Some(admin))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<Option<AdminSession>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    auth::sign_out(&session).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Every student document, oldest first.
#[cfg(feature = "server")]
#[get("/api/students", session: tower_sessions::Session)]
pub async fn list_students() -> Result<Vec<StudentRecord>, ServerFnError> {
    require_admin(&session).await?;
    let store = db::students().await.map_err(server_error)?;
    store.fetch_all().await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/students")]
pub async fn list_students() -> Result<Vec<StudentRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert a new student document and return its id.
#[cfg(feature = "server")]
#[post("/api/students", session: tower_sessions::Session)]
pub async fn add_student(fields: StudentFields) -> Result<RecordId, ServerFnError> {
    let admin = require_admin(&session).await?;
    let store = db::students().await.map_err(server_error)?;
    let id = store.insert_document(fields).await.map_err(server_error)?;
    tracing::info!(%id, by = %admin.email, "student added");
    Ok(id)
}

#[cfg(not(feature = "server"))]
#[post("/api/students")]
pub async fn add_student(fields: StudentFields) -> Result<RecordId, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Overwrite a student document.
#[cfg(feature = "server")]
#[post("/api/students/update", session: tower_sessions::Session)]
pub async fn update_student(id: RecordId, fields: StudentFields) -> Result<bool, ServerFnError> {
    let admin = require_admin(&session).await?;
    let store = db::students().await.map_err(server_error)?;
    match store.replace_document(&id, fields).await {
        Ok(()) => {
            tracing::info!(%id, by = %admin.email, "student updated");
            Ok(true)
        }
        Err(records::StoreError::NotFound(_)) => Ok(false),
        Err(e) => Err(server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/students/update")]
pub async fn update_student(id: RecordId, fields: StudentFields) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a student document.
#[cfg(feature = "server")]
#[post("/api/students/delete", session: tower_sessions::Session)]
pub async fn delete_student(id: RecordId) -> Result<bool, ServerFnError> {
    let admin = require_admin(&session).await?;
    let store = db::students().await.map_err(server_error)?;
    match store.delete_document(&id).await {
        Ok(()) => {
            tracing::info!(%id, by = %admin.email, "student deleted");
            Ok(true)
        }
        Err(records::StoreError::NotFound(_)) => Ok(false),
        Err(e) => Err(server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/students/delete")]
pub async fn delete_student(id: RecordId) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Display settings the client needs.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_config() -> Result<RollcallConfig, ServerFnError> {
    Ok(settings::config().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_config() -> Result<RollcallConfig, ServerFnError> {
    Ok(RollcallConfig::default())
}
