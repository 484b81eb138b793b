//! Credential hashing and user account queries
//!
//! Passwords are never stored; the `users` table holds a per-account random
//! salt and the SHA-256 digest of salt + password. This module contains only
//! pure functions and database operations, no HTTP framework dependencies.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::models::UserAccount;
use crate::{Error, Result};

// ========================================
// Credential Hashing
// ========================================

/// Generate a random per-account salt (32 hex characters)
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Calculate the credential digest for a password and salt
///
/// # Examples
///
/// ```
/// use ladle_common::auth::hash_password;
///
/// let digest = hash_password("secret", "00112233445566778899aabbccddeeff");
/// assert_eq!(digest.len(), 64); // SHA-256 is 64 hex chars
/// ```
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a password attempt against a stored salt and digest
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}

// ========================================
// User Account Queries
// ========================================

/// Create a new user account
///
/// The email must be unique; a duplicate registration is rejected as invalid
/// input without touching the existing account.
pub async fn create_user(pool: &SqlitePool, email: &str, password: &str) -> Result<UserAccount> {
    let guid = Uuid::new_v4().to_string();
    let salt = generate_salt();
    let hash = hash_password(password, &salt);

    let result = sqlx::query(
        "INSERT INTO users (guid, email, password_hash, password_salt) VALUES (?, ?, ?, ?)",
    )
    .bind(&guid)
    .bind(email)
    .bind(&hash)
    .bind(&salt)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(UserAccount {
            guid,
            email: email.to_string(),
            password_hash: hash,
            password_salt: salt,
        }),
        Err(e) => {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                Err(Error::InvalidInput(format!(
                    "email already registered: {}",
                    email
                )))
            } else {
                Err(Error::Database(e))
            }
        }
    }
}

/// Look up a user account by email
pub async fn find_user(pool: &SqlitePool, email: &str) -> Result<Option<UserAccount>> {
    let row: Option<(String, String, String, String)> = sqlx::query_as(
        "SELECT guid, email, password_hash, password_salt FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(guid, email, password_hash, password_salt)| UserAccount {
        guid,
        email,
        password_hash,
        password_salt,
    }))
}

/// Look up a user and check the password attempt
///
/// Returns `None` both for an unknown email and for a wrong password, so
/// callers cannot distinguish the two.
pub async fn verify_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<UserAccount>> {
    let Some(account) = find_user(pool, email).await? else {
        return Ok(None);
    };

    if verify_password(password, &account.password_salt, &account.password_hash) {
        Ok(Some(account))
    } else {
        Ok(None)
    }
}

// ========================================
// Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_format() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_salts_are_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let salt = "00112233445566778899aabbccddeeff";
        assert_eq!(hash_password("secret", salt), hash_password("secret", salt));
    }

    #[test]
    fn test_hash_depends_on_salt() {
        let a = hash_password("secret", "00112233445566778899aabbccddeeff");
        let b = hash_password("secret", "ffeeddccbbaa99887766554433221100");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let salt = generate_salt();
        let hash = hash_password("secret", &salt);
        assert!(verify_password("secret", &salt, &hash));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let salt = generate_salt();
        let hash = hash_password("secret", &salt);
        assert!(!verify_password("wrong", &salt, &hash));
    }
}
