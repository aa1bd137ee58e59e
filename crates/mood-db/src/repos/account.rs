//! Account repository.
//!
//! Credential records for registered users. Passwords are stored as the
//! lowercase hex SHA-256 digest of the trimmed password.

use chrono::Utc;
use sha2::{Digest, Sha256};

use mood_core::errors::CoreError;
use mood_core::identity::Username;

use crate::error::DatabaseError;
use crate::service::MoodService;

/// Lowercase hex SHA-256 of `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

fn normalize_password(raw: &str) -> Result<&str, CoreError> {
    let password = raw.trim();
    if password.is_empty() {
        return Err(CoreError::Validation("password must not be empty".into()));
    }
    Ok(password)
}

impl MoodService {
    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an empty or reserved username
    /// or an empty password, and `DatabaseError::DuplicateUser` if the name is
    /// taken.
    pub async fn signup(&self, username: &str, password: &str) -> Result<Username, DatabaseError> {
        let username = Username::parse(username)?;
        let password = normalize_password(password)?;

        if self.find_user(username.as_str()).await?.is_some() {
            return Err(DatabaseError::DuplicateUser(username.to_string()));
        }

        let result = self
            .db()
            .conn()
            .execute(
                "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![
                    username.as_str(),
                    hash_password(password),
                    Utc::now().to_rfc3339()
                ],
            )
            .await;

        match result {
            Ok(_) => {
                tracing::info!(%username, "registered user");
                Ok(username)
            }
            // Lost a race with a concurrent signup for the same name.
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                Err(DatabaseError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username and password pair.
    ///
    /// Unknown users, the reserved feed name, and wrong passwords all fail the
    /// same way.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidCredentials` on any mismatch.
    pub async fn login(&self, username: &str, password: &str) -> Result<Username, DatabaseError> {
        let Ok(username) = Username::parse(username) else {
            return Err(DatabaseError::InvalidCredentials);
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT password_hash FROM users WHERE username = ?1",
                [username.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            tracing::debug!(%username, "login for unknown user");
            return Err(DatabaseError::InvalidCredentials);
        };

        let stored = row.get::<String>(0)?;
        if stored != hash_password(password.trim()) {
            tracing::debug!(%username, "login with wrong password");
            return Err(DatabaseError::InvalidCredentials);
        }
        Ok(username)
    }

    /// Look up a registered user by name.
    ///
    /// Returns `None` for unknown names, including ones that are not valid
    /// usernames at all.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_user(&self, username: &str) -> Result<Option<Username>, DatabaseError> {
        let Ok(username) = Username::parse(username) else {
            return Ok(None);
        };
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT username FROM users WHERE username = ?1",
                [username.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(_) => Ok(Some(username)),
            None => Ok(None),
        }
    }
}
