//! Session Gate: the sign-in form and its hand-off to the identity provider.
//!
//! The gate does no local checking of the credentials. Any rejection from the
//! [`Authenticator`], whatever its cause, is reported with the same static
//! message so the form never reveals which accounts exist.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Message shown for every failed sign-in.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// The signed-in administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    Rejected,
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// External identity provider.
pub trait Authenticator {
    fn verify(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = Result<AdminSession, AuthError>>;
    fn end_session(&self) -> impl Future<Output = Result<(), AuthError>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Authenticated(AdminSession),
    Rejected,
}

/// State of the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    pub identifier: String,
    pub secret: String,
    pub error: Option<&'static str>,
    pub busy: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. The secret is handed to `auth` and not kept afterwards.
    pub async fn submit<A: Authenticator>(&mut self, auth: &A) -> GateOutcome {
        self.error = None;
        self.busy = true;
        let secret = std::mem::take(&mut self.secret);
        let result = auth.verify(&self.identifier, &secret).await;
        drop(secret);
        self.busy = false;

        match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "admin signed in");
                GateOutcome::Authenticated(session)
            }
            Err(e) => {
                tracing::debug!("sign-in rejected: {e}");
                self.error = Some(INVALID_CREDENTIALS);
                GateOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Accepts exactly one email/password pair.
    #[derive(Debug, Default)]
    pub(crate) struct FixedAuth {
        pub email: String,
        pub password: String,
        pub down: bool,
        pub seen: RefCell<Vec<(String, String)>>,
        pub ended: Cell<usize>,
    }

    impl FixedAuth {
        pub(crate) fn new(email: &str, password: &str) -> Self {
            Self {
                email: email.into(),
                password: password.into(),
                ..Default::default()
            }
        }
    }

    impl Authenticator for FixedAuth {
        async fn verify(&self, identifier: &str, secret: &str) -> Result<AdminSession, AuthError> {
            self.seen
                .borrow_mut()
                .push((identifier.to_string(), secret.to_string()));
            if self.down {
                return Err(AuthError::Unavailable("offline".into()));
            }
            if identifier == self.email && secret == self.password {
                Ok(AdminSession {
                    email: identifier.to_string(),
                })
            } else {
                Err(AuthError::Rejected)
            }
        }

        async fn end_session(&self) -> Result<(), AuthError> {
            if self.down {
                return Err(AuthError::Unavailable("offline".into()));
            }
            self.ended.set(self.ended.get() + 1);
            Ok(())
        }
    }

    fn filled(identifier: &str, secret: &str) -> SessionGate {
        SessionGate {
            identifier: identifier.into(),
            secret: secret.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_authenticate() {
        let auth = FixedAuth::new("admin@school.in", "hunter22");
        let mut gate = filled("admin@school.in", "hunter22");

        let outcome = gate.submit(&auth).await;
        assert_eq!(
            outcome,
            GateOutcome::Authenticated(AdminSession {
                email: "admin@school.in".into()
            })
        );
        assert!(gate.error.is_none());
        assert!(gate.secret.is_empty());
        assert!(!gate.busy);
    }

    #[tokio::test]
    async fn test_wrong_password_shows_generic_message() {
        let auth = FixedAuth::new("admin@school.in", "hunter22");
        let mut gate = filled("admin@school.in", "wrong");

        assert_eq!(gate.submit(&auth).await, GateOutcome::Rejected);
        assert_eq!(gate.error, Some(INVALID_CREDENTIALS));
        assert!(gate.secret.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_shows_same_message() {
        let mut auth = FixedAuth::new("admin@school.in", "hunter22");
        auth.down = true;
        let mut gate = filled("admin@school.in", "hunter22");

        assert_eq!(gate.submit(&auth).await, GateOutcome::Rejected);
        assert_eq!(gate.error, Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let auth = FixedAuth::new("admin@school.in", "hunter22");
        let mut gate = filled("admin@school.in", "wrong");
        gate.submit(&auth).await;
        assert!(gate.error.is_some());

        gate.secret = "hunter22".into();
        assert!(matches!(
            gate.submit(&auth).await,
            GateOutcome::Authenticated(_)
        ));
        assert!(gate.error.is_none());
        assert_eq!(auth.seen.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_no_local_validation() {
        let auth = FixedAuth::new("admin@school.in", "hunter22");
        let mut gate = filled("", "");
        assert_eq!(gate.submit(&auth).await, GateOutcome::Rejected);
        // The provider still saw the attempt.
        assert_eq!(auth.seen.borrow()[0], (String::new(), String::new()));
    }
}
