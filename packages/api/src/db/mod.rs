//! # Database module — the student collection on PostgreSQL
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx.
//!
//! ## Design
//!
//! Documents live in one `documents` table (see `migrations/`), keyed by a
//! UUID and tagged with the collection they belong to. Each row's `data`
//! column is the JSON body of a student record, so the table behaves like the
//! schemaless document store the application was written against.
//!
//! Both the connection pool and the [`PgStudentStore`] are lazy, process-wide
//! singletons backed by [`tokio::sync::OnceCell`].
//!
//! ## Re-exports
//!
//! - [`get_pool`] — returns `&'static PgPool`, initialising it on first use.
//! - [`students`] — returns the shared [`PgStudentStore`] for the configured
//!   collection.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod students;

#[cfg(feature = "server")]
pub use pool::{get_pool, DbError};
#[cfg(feature = "server")]
pub use students::{students, PgStudentStore};
