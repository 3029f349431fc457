use std::sync::RwLock;

use thiserror::Error;

/// Errors that can occur in the user store
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists: {0}")]
    Duplicate(String),
}

/// Credential record held by the user store
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    /// Normalized (trimmed, lowercased) email
    pub email: String,
    /// PHC-format password hash
    pub password_hash: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Storage abstraction for credential records
///
/// The store is injected into the authentication service so the in-memory
/// implementation can be swapped for a real database without touching the
/// sign-up/sign-in logic.
pub trait UserStore: Send + Sync {
    /// Find a user by normalized email
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    /// Insert a user, rejecting duplicate emails atomically
    fn insert_unique(&self, user: UserRecord) -> Result<(), UserStoreError>;
}

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        // A poisoned lock only means a panic happened mid-operation; the
        // record vector itself is still consistent.
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.iter().find(|user| user.email == email).cloned()
    }

    fn insert_unique(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(UserStoreError::Duplicate(user.email));
        }

        users.push(user);
        Ok(())
    }
}
