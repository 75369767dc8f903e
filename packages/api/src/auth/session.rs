//! Session keys and helpers over [`tower_sessions::Session`].

use records::AdminSession;
use tower_sessions::session::Error;
use tower_sessions::Session;

/// Key under which the signed-in admin is stored.
pub const SESSION_ADMIN_KEY: &str = "admin";

pub async fn current_admin(session: &Session) -> Result<Option<AdminSession>, Error> {
    session.get(SESSION_ADMIN_KEY).await
}

/// Record a successful sign-in. The session id is rotated first.
pub async fn sign_in(session: &Session, admin: &AdminSession) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_ADMIN_KEY, admin).await
}

pub async fn sign_out(session: &Session) -> Result<(), Error> {
    session.flush().await
}
