//! Session operations
//!
//! At most one identity is active at a time, persisted under the
//! `currentUser` record until explicit sign-out or storage clear. All reads
//! and mutations of user-owned data are gated on the current session.

use chrono::Utc;
use tracing::info;

use ladle_common::auth;
use ladle_common::db::models::{SessionUser, UserAccount};
use ladle_common::db::{keys, RecordStore};
use ladle_common::{Error, Result};

/// Register a new account and sign it in
pub async fn sign_up(store: &RecordStore, email: &str, password: &str) -> Result<SessionUser> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(Error::InvalidInput(
            "email and password are both required".to_string(),
        ));
    }

    let account = auth::create_user(store.pool(), email, password).await?;
    info!(email = %account.email, "Registered new user");

    establish(store, account).await
}

/// Sign in with existing credentials
///
/// Returns `None` when the credentials do not match; the prior session (if
/// any) is left untouched in that case.
pub async fn sign_in(
    store: &RecordStore,
    email: &str,
    password: &str,
) -> Result<Option<SessionUser>> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(Error::InvalidInput(
            "email and password are both required".to_string(),
        ));
    }

    match auth::verify_user(store.pool(), email, password).await? {
        Some(account) => Ok(Some(establish(store, account).await?)),
        None => Ok(None),
    }
}

/// Clear the active session; signing out while signed out is a no-op
pub async fn sign_out(store: &RecordStore) -> Result<()> {
    store.remove(keys::CURRENT_USER).await?;
    info!("Signed out");
    Ok(())
}

/// The currently signed-in identity, `None` when signed out
pub async fn current_user(store: &RecordStore) -> Result<Option<SessionUser>> {
    store.get_json(keys::CURRENT_USER).await
}

async fn establish(store: &RecordStore, account: UserAccount) -> Result<SessionUser> {
    let session = SessionUser {
        user_id: account.guid,
        email: account.email,
        signed_in_at: Utc::now(),
    };
    store.set_json(keys::CURRENT_USER, &session).await?;
    info!(email = %session.email, "Session established");
    Ok(session)
}
