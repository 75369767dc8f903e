//! Administrator authentication: a single configured account, an Argon2
//! password hash, and a cookie session.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::{AdminCredentials, CredentialsError};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError};
#[cfg(feature = "server")]
pub use session::{current_admin, sign_in, sign_out, SESSION_ADMIN_KEY};
