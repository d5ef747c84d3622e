//! Repository layer: whole-document data access contracts and store-backed
//! implementations.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for users, enrollments, and
//!   the catalog.
//! - Isolate document keys and read-modify-writeback mechanics from the
//!   service layer.
//!
//! # Invariants
//! - Every mutation loads the full document, changes it in memory, and
//!   writes the full document back.
//! - Repository APIs return semantic errors (`DuplicateUser`,
//!   `UserNotFound`, ...) in addition to storage transport errors.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod catalog_repo;
pub mod enrollment_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for document persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage transport or codec failure.
    Store(StoreError),
    /// Insert would collide with an existing email or username.
    DuplicateUser { email: String, username: String },
    /// Update target does not exist.
    UserNotFound(String),
    /// The user already holds an enrollment for this course.
    DuplicateEnrollment { username: String, course: String },
    /// No enrollment for this user/course pair.
    EnrollmentNotFound { username: String, course: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::DuplicateUser { email, username } => write!(
                f,
                "user already exists with email `{email}` or username `{username}`"
            ),
            Self::UserNotFound(username) => write!(f, "user not found: {username}"),
            Self::DuplicateEnrollment { username, course } => {
                write!(f, "user `{username}` is already enrolled in `{course}`")
            }
            Self::EnrollmentNotFound { username, course } => {
                write!(f, "user `{username}` has no enrollment for `{course}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
