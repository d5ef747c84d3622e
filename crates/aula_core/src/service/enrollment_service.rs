//! Enrollment use-case service: enroll, unenroll, and "my courses".
//!
//! # Responsibility
//! - Provide the per-user enrollment operations behind semantic errors.
//!
//! # Invariants
//! - A user never holds two enrollments with the same course name.

use crate::model::enrollment::EnrolledCourse;
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from enrollment use-cases.
#[derive(Debug)]
pub enum EnrollmentServiceError {
    /// The user already enrolled in this course.
    AlreadyEnrolled { username: String, course: String },
    /// The user holds no enrollment for this course.
    NotEnrolled { username: String, course: String },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EnrollmentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyEnrolled { username, course } => {
                write!(f, "user `{username}` is already enrolled in `{course}`")
            }
            Self::NotEnrolled { username, course } => {
                write!(f, "user `{username}` is not enrolled in `{course}`")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EnrollmentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for EnrollmentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateEnrollment { username, course } => {
                Self::AlreadyEnrolled { username, course }
            }
            RepoError::EnrollmentNotFound { username, course } => {
                Self::NotEnrolled { username, course }
            }
            other => Self::Repo(other),
        }
    }
}

/// Enrollment service facade over a repository implementation.
pub struct EnrollmentService<E: EnrollmentRepository> {
    repo: E,
}

impl<E: EnrollmentRepository> EnrollmentService<E> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: E) -> Self {
        Self { repo }
    }

    /// Enrolls `username` in `course`.
    pub fn enroll(
        &self,
        username: &str,
        course: &EnrolledCourse,
    ) -> Result<(), EnrollmentServiceError> {
        self.repo.add(username, course)?;
        info!(
            "event=course_enroll module=enrollment status=ok username={username} course={}",
            course.name
        );
        Ok(())
    }

    /// Removes the `username` enrollment named `course_name`.
    pub fn unenroll(&self, username: &str, course_name: &str) -> Result<(), EnrollmentServiceError> {
        self.repo.remove(username, course_name)?;
        info!(
            "event=course_unenroll module=enrollment status=ok username={username} course={course_name}"
        );
        Ok(())
    }

    /// Returns the user's enrolled courses; empty when none.
    pub fn my_courses(&self, username: &str) -> Result<Vec<EnrolledCourse>, EnrollmentServiceError> {
        Ok(self.repo.list_for(username)?)
    }
}
