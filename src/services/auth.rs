use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::users::{UserRecord, UserStore};

/// Errors surfaced by sign-up and sign-in
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("No user found with this email")]
    NoSuchUser,

    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// An issued session
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

/// Sign-up / sign-in service
///
/// Composes the injected user store with Argon2id password hashing and
/// HS256 session tokens. Every failure is a typed rejection; there is no
/// partial success path.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, token_secret: &str, token_ttl_secs: u64) -> Self {
        Self {
            store,
            encoding_key: EncodingKey::from_secret(token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(token_secret.as_bytes()),
            token_ttl_secs,
        }
    }

    /// Create a credential record and issue a session
    ///
    /// The display name defaults to the email local part when not supplied.
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<Session, AuthError> {
        let email = normalize_email(email);

        if self.store.find_by_email(&email).is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| local_part(&email).to_string());

        let user = UserRecord {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.clone(),
            password_hash: hash_password(password)?,
            name,
            created_at: chrono::Utc::now(),
        };

        // The store re-checks uniqueness under its write lock; the lookup
        // above only exists to skip the hashing work on the common path.
        self.store
            .insert_unique(user.clone())
            .map_err(|_| AuthError::AlreadyExists)?;

        tracing::info!("Created account for {}", user.email);

        self.issue_session(&user)
    }

    /// Validate credentials and issue a session
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);

        let user = self
            .store
            .find_by_email(&email)
            .ok_or(AuthError::NoSuchUser)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!("Signed in {}", user.email);

        self.issue_session(&user)
    }

    /// Validate a session token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }

    fn issue_session(&self, user: &UserRecord) -> Result<Session, AuthError> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now,
            exp: now + self.token_ttl_secs as i64,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(Session {
            token,
            user: user.clone(),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Hash a password with Argon2id and a per-user random salt
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC-format hash
fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
