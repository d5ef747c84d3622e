//! Account use-case service: registration, login, profile, recovery.
//!
//! # Responsibility
//! - Validate account input before any persistence happens.
//! - Keep the stored user list and the session snapshot consistent.
//!
//! # Invariants
//! - A successful login always rewrites the session snapshot.
//! - Profile updates rewrite both the user-list entry and the session
//!   snapshot in that order.
//! - The username of a registered account never changes.

use crate::model::user::{
    hash_password, validate_email, validate_name, validate_password, NewUser, User,
    UserValidationError,
};
use crate::repo::user_repo::{SessionRepository, UserRepository};
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from account use-cases.
#[derive(Debug)]
pub enum AuthServiceError {
    /// A registration or profile field failed validation.
    Validation(UserValidationError),
    /// Email or username is already registered.
    DuplicateUser,
    /// Unknown identity or wrong password; callers cannot tell which.
    InvalidCredentials,
    /// Operation requires a logged-in session.
    NotLoggedIn,
    /// Profile update would take an email held by another account.
    EmailTaken(String),
    /// Password recovery target email is not registered.
    EmailNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for AuthServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateUser => write!(f, "user already exists"),
            Self::InvalidCredentials => write!(f, "invalid username/email or password"),
            Self::NotLoggedIn => write!(f, "no user is logged in"),
            Self::EmailTaken(email) => {
                write!(f, "email `{email}` is already used by another account")
            }
            Self::EmailNotFound(email) => write!(f, "email not registered: {email}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UserValidationError> for AuthServiceError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for AuthServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUser { .. } => Self::DuplicateUser,
            other => Self::Repo(other),
        }
    }
}

/// Profile edit input. `password: None` keeps the stored hash untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Account service facade over user and session repositories.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: U,
    sessions: S,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a service using the provided repository implementations.
    pub fn new(users: U, sessions: S) -> Self {
        Self { users, sessions }
    }

    /// Registers a new account.
    ///
    /// # Contract
    /// - All fields are validated before any storage read.
    /// - Duplicate email or username leaves the user list untouched.
    pub fn register(&self, new_user: NewUser) -> Result<User, AuthServiceError> {
        let username = new_user.username.clone();
        let user = new_user.into_user()?;
        self.users.insert(&user)?;
        info!("event=user_register module=auth status=ok username={username}");
        Ok(user)
    }

    /// Logs in with an email or username plus password.
    ///
    /// On success the user snapshot is persisted as the active session.
    pub fn login(&self, identity: &str, password: &str) -> Result<User, AuthServiceError> {
        let Some(user) = self.users.find_by_identity(identity)? else {
            info!("event=user_login module=auth status=rejected reason=unknown_identity");
            return Err(AuthServiceError::InvalidCredentials);
        };
        if !user.verify_password(password) {
            info!(
                "event=user_login module=auth status=rejected reason=bad_password username={}",
                user.username
            );
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.sessions.set(&user)?;
        info!(
            "event=user_login module=auth status=ok username={} role={:?}",
            user.username, user.role
        );
        Ok(user)
    }

    /// Clears the active session. Succeeds when nobody is logged in.
    pub fn logout(&self) -> Result<(), AuthServiceError> {
        self.sessions.clear()?;
        info!("event=user_logout module=auth status=ok");
        Ok(())
    }

    /// Returns the logged-in user snapshot, if any.
    pub fn current_user(&self) -> RepoResult<Option<User>> {
        self.sessions.current()
    }

    /// Updates the logged-in user's profile.
    ///
    /// # Contract
    /// - Requires an active session.
    /// - Email uniqueness is checked against every other account.
    /// - `password: Some(_)` must satisfy the password policy and replaces
    ///   the stored hash; `None` (or an empty string) keeps it.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<User, AuthServiceError> {
        let Some(mut user) = self.sessions.current()? else {
            return Err(AuthServiceError::NotLoggedIn);
        };

        validate_name(&update.name)?;
        validate_email(&update.email)?;
        if let Some(other) = self.users.find_by_email(&update.email)? {
            if other.username != user.username {
                return Err(AuthServiceError::EmailTaken(update.email));
            }
        }

        let new_password = update.password.filter(|value| !value.is_empty());
        if let Some(password) = &new_password {
            validate_password(password)?;
        }

        user.name = update.name;
        user.email = update.email;
        if let Some(password) = new_password {
            user.password_hash = hash_password(&user.password_salt, &password);
        }

        self.users.update(&user.username, &user)?;
        self.sessions.set(&user)?;
        info!(
            "event=profile_update module=auth status=ok username={}",
            user.username
        );
        Ok(user)
    }

    /// Checks that `email` belongs to a registered account.
    ///
    /// The legacy flow only simulated sending a recovery link; this keeps
    /// the lookup semantics and leaves delivery to callers.
    pub fn request_password_reset(&self, email: &str) -> Result<(), AuthServiceError> {
        if self.users.find_by_email(email)?.is_none() {
            return Err(AuthServiceError::EmailNotFound(email.to_string()));
        }
        info!("event=password_reset_request module=auth status=ok");
        Ok(())
    }
}
