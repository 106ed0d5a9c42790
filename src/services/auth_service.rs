use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::user_store::UserStore,
    error::{AppError, Result},
    models::{FieldValue, Session, UserInput},
};

/// Login check and the in-memory session table behind it
#[derive(Clone)]
pub struct AuthService {
    hash_passwords: bool,
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl AuthService {
    pub fn new(hash_passwords: bool) -> Self {
        Self {
            hash_passwords,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Replace the submitted password with an argon2 hash when hashing is
    /// enabled. Values that are already PHC strings are kept; non-text values
    /// are hashed in their text form.
    pub fn protect_password(&self, user: &mut UserInput) -> Result<()> {
        if !self.hash_passwords {
            return Ok(());
        }

        let Some(password) = user.password.as_ref().map(ToString::to_string) else {
            return Ok(());
        };
        if PasswordHash::new(&password).is_ok() {
            return Ok(());
        }

        let hashed = hash_password(&password)?;
        user.password = Some(FieldValue::Text(hashed));
        Ok(())
    }

    /// Verify credentials and open a session. Returns the session token.
    pub async fn login(
        &self,
        users: &UserStore,
        username: &str,
        password: &str,
    ) -> Result<(String, Session)> {
        let user = users
            .get_user_by_username(username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let stored = user.password.as_deref().unwrap_or_default();
        if !verify_password(stored, password) {
            tracing::warn!(username, "rejected login");
            return Err(AppError::Unauthorized);
        }

        let session = Session {
            user_id: user.user_id,
            username: user.username,
            role: user.role,
        };
        let token = Uuid::new_v4().to_string();

        self.sessions
            .write()
            .await
            .insert(token.clone(), session.clone());

        tracing::info!(user_id = session.user_id, "user logged in");
        Ok((token, session))
    }

    pub async fn get_session(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Drop a session. Returns whether the token was live.
    pub async fn logout(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))?;

    Ok(hash.to_string())
}

/// Check `candidate` against a stored password, which is either an argon2
/// PHC string or legacy cleartext.
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => !stored.is_empty() && stored == candidate,
    }
}
