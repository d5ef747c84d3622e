//! User account model, credential hashing, and field validation.
//!
//! # Responsibility
//! - Define the stored user record and registration input shape.
//! - Own the salted password hashing used by registration and login.
//! - Validate names, emails, usernames, and the password policy.
//!
//! # Invariants
//! - Passwords are never persisted in clear text; only `password_hash`
//!   and `password_salt` are stored.
//! - `username` is the stable identity of a user record.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PASSWORD_MIN_CHARS: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static UPPERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid special-char regex"));

/// Account privilege level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular learner account.
    User,
    /// May mutate the course catalog.
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

/// Stored user record.
///
/// Field names follow the legacy `usuarios` document, except that the
/// plaintext `password` field is replaced by a salted hash pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name shown in the profile.
    pub name: String,
    /// Contact email; unique across the user list.
    pub email: String,
    /// Stable login identity; unique across the user list.
    pub username: String,
    /// Lowercase hex SHA-256 of `salt + password`. Empty in documents
    /// exported before hashing existed; such accounts cannot log in until
    /// their password is reset.
    #[serde(default)]
    pub password_hash: String,
    /// Random salt, 16 hex characters.
    #[serde(default)]
    pub password_salt: String,
    /// Privilege level; absent in old documents, defaulting to `user`.
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    /// Checks a login attempt against the stored salted hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        hash_password(&self.password_salt, candidate) == self.password_hash
    }

    /// Returns whether this account may mutate the catalog.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Registration input with the password still in clear text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl NewUser {
    /// Convenience constructor for a regular-role registration.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
            password: password.into(),
            role: UserRole::User,
        }
    }

    /// Validates all registration fields, then hashes the password into a
    /// storable [`User`] record.
    pub fn into_user(self) -> Result<User, UserValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_username(&self.username)?;
        validate_password(&self.password)?;

        let salt = generate_salt();
        let hash = hash_password(&salt, &self.password);
        Ok(User {
            name: self.name,
            email: self.email,
            username: self.username,
            password_hash: hash,
            password_salt: salt,
            role: self.role,
        })
    }
}

/// Field-level validation failure for account data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name is empty after trimming.
    BlankName,
    /// Email does not match the accepted shape.
    InvalidEmail(String),
    /// Username is empty after trimming.
    BlankUsername,
    /// Password misses length or character-class requirements.
    WeakPassword,
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email: `{value}`"),
            Self::BlankUsername => write!(f, "username must not be blank"),
            Self::WeakPassword => write!(
                f,
                "password must have at least {PASSWORD_MIN_CHARS} characters including \
                 uppercase, lowercase, digit, and special characters"
            ),
        }
    }
}

impl Error for UserValidationError {}

/// Validates a display name: non-blank after trimming.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::BlankName);
    }
    Ok(())
}

/// Validates an email against the legacy `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validates a username: non-blank after trimming.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.trim().is_empty() {
        return Err(UserValidationError::BlankUsername);
    }
    Ok(())
}

/// Validates the password policy carried over from the legacy forms:
/// minimum 8 characters with at least one uppercase letter, one lowercase
/// letter, one digit, and one special character.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let strong = password.chars().count() >= PASSWORD_MIN_CHARS
        && UPPERCASE_RE.is_match(password)
        && LOWERCASE_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && SPECIAL_RE.is_match(password);
    if !strong {
        return Err(UserValidationError::WeakPassword);
    }
    Ok(())
}

/// Generates a random 16-hex-character salt.
pub fn generate_salt() -> String {
    let salt: u64 = rand::thread_rng().gen();
    format!("{salt:016x}")
}

/// Hashes `salt + password` with SHA-256, returned as lowercase hex.
pub fn hash_password(salt: &str, password: &str) -> String {
    let digest = Sha256::digest(format!("{salt}{password}").as_bytes());
    format!("{digest:x}")
}
