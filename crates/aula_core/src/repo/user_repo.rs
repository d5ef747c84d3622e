//! User list and session repositories over the document store.
//!
//! # Responsibility
//! - Provide account persistence on top of the `usuarios` document.
//! - Own the logged-in session snapshot under `usuarioLogueado` and the
//!   `superuser` marker document.
//!
//! # Invariants
//! - `insert` rejects any email or username already present in the list.
//! - `update` is keyed by username; usernames never change.
//! - The `superuser` document exists exactly while an admin session does.

use crate::model::user::User;
use crate::repo::{RepoError, RepoResult};
use crate::store::{keys, Store};

/// Repository interface for the registered-user list.
pub trait UserRepository {
    /// Returns the full user list; empty when nobody registered yet.
    fn list(&self) -> RepoResult<Vec<User>>;
    /// Finds one user whose email **or** username equals `identity`.
    fn find_by_identity(&self, identity: &str) -> RepoResult<Option<User>>;
    /// Finds one user by exact email.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    /// Finds one user by exact username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
    /// Appends a new user after checking email/username uniqueness.
    fn insert(&self, user: &User) -> RepoResult<()>;
    /// Replaces the record currently stored under `username`.
    fn update(&self, username: &str, user: &User) -> RepoResult<()>;
}

/// Repository interface for the persisted login session.
pub trait SessionRepository {
    /// Returns the logged-in user snapshot, if any.
    fn current(&self) -> RepoResult<Option<User>>;
    /// Persists `user` as the active session.
    fn set(&self, user: &User) -> RepoResult<()>;
    /// Clears the active session. No-op when nobody is logged in.
    fn clear(&self) -> RepoResult<()>;
}

/// Store-backed user repository.
pub struct StoreUserRepository<'s> {
    store: &'s Store,
}

impl<'s> StoreUserRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<User>> {
        Ok(self.store.read_document(keys::USERS)?.unwrap_or_default())
    }

    fn save(&self, users: &[User]) -> RepoResult<()> {
        self.store.write_document(keys::USERS, &users)?;
        Ok(())
    }
}

impl UserRepository for StoreUserRepository<'_> {
    fn list(&self) -> RepoResult<Vec<User>> {
        self.load()
    }

    fn find_by_identity(&self, identity: &str) -> RepoResult<Option<User>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|user| user.email == identity || user.username == identity))
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|user| user.email == email))
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|user| user.username == username))
    }

    fn insert(&self, user: &User) -> RepoResult<()> {
        let mut users = self.load()?;
        let taken = users
            .iter()
            .any(|existing| existing.email == user.email || existing.username == user.username);
        if taken {
            return Err(RepoError::DuplicateUser {
                email: user.email.clone(),
                username: user.username.clone(),
            });
        }

        users.push(user.clone());
        self.save(&users)
    }

    fn update(&self, username: &str, user: &User) -> RepoResult<()> {
        let mut users = self.load()?;
        let Some(slot) = users.iter_mut().find(|existing| existing.username == username) else {
            return Err(RepoError::UserNotFound(username.to_string()));
        };
        *slot = user.clone();
        self.save(&users)
    }
}

/// Store-backed session repository.
pub struct StoreSessionRepository<'s> {
    store: &'s Store,
}

impl<'s> StoreSessionRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }
}

impl SessionRepository for StoreSessionRepository<'_> {
    fn current(&self) -> RepoResult<Option<User>> {
        Ok(self.store.read_document(keys::SESSION)?)
    }

    fn set(&self, user: &User) -> RepoResult<()> {
        self.store.write_document(keys::SESSION, user)?;
        if user.is_admin() {
            self.store.write_document(keys::SUPERUSER, &true)?;
        } else {
            self.store.remove_document(keys::SUPERUSER)?;
        }
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.store.remove_document(keys::SESSION)?;
        self.store.remove_document(keys::SUPERUSER)?;
        Ok(())
    }
}
