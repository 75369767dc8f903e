//! Admin credentials from environment variables.

use records::AdminSession;

use super::password::{verify_password, PasswordError};

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("{0} not set")]
    Missing(&'static str),
}

/// The one account allowed to sign in.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2 PHC string, e.g. `$argon2id$v=19$...`.
    pub password_hash: String,
}

impl AdminCredentials {
    /// Read `ADMIN_EMAIL` and `ADMIN_PASSWORD_HASH`.
    pub fn from_env() -> Result<Self, CredentialsError> {
        dotenvy::dotenv().ok();

        let email = std::env::var("ADMIN_EMAIL")
            .map_err(|_| CredentialsError::Missing("ADMIN_EMAIL"))?;
        let password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .map_err(|_| CredentialsError::Missing("ADMIN_PASSWORD_HASH"))?;

        Ok(Self::new(email, password_hash))
    }

    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: normalize(&email.into()),
            password_hash: password_hash.into(),
        }
    }

    /// `Ok(None)` when the email or password does not match.
    pub fn verify(&self, email: &str, password: &str) -> Result<Option<AdminSession>, PasswordError> {
        if normalize(email) != self.email {
            return Ok(None);
        }
        if !verify_password(password, &self.password_hash)? {
            return Ok(None);
        }
        Ok(Some(AdminSession {
            email: self.email.clone(),
        }))
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
