//! Enrollment map repository over the document store.
//!
//! # Responsibility
//! - Persist the username -> enrolled-course-list map under the
//!   `inscripcionesPorUsuario` document.
//!
//! # Invariants
//! - `add` rejects a course name the user already holds.
//! - Users without enrollments simply have no map entry; an empty list and
//!   a missing entry are equivalent on read.

use crate::model::enrollment::{EnrolledCourse, EnrollmentMap};
use crate::repo::{RepoError, RepoResult};
use crate::store::{keys, Store};

/// Repository interface for per-user enrollments.
pub trait EnrollmentRepository {
    /// Returns the user's enrolled courses; empty when none.
    fn list_for(&self, username: &str) -> RepoResult<Vec<EnrolledCourse>>;
    /// Adds one enrollment for the user.
    fn add(&self, username: &str, course: &EnrolledCourse) -> RepoResult<()>;
    /// Removes the user's enrollment with the given course name.
    fn remove(&self, username: &str, course_name: &str) -> RepoResult<()>;
}

/// Store-backed enrollment repository.
pub struct StoreEnrollmentRepository<'s> {
    store: &'s Store,
}

impl<'s> StoreEnrollmentRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<EnrollmentMap> {
        Ok(self
            .store
            .read_document(keys::ENROLLMENTS)?
            .unwrap_or_default())
    }

    fn save(&self, map: &EnrollmentMap) -> RepoResult<()> {
        self.store.write_document(keys::ENROLLMENTS, map)?;
        Ok(())
    }
}

impl EnrollmentRepository for StoreEnrollmentRepository<'_> {
    fn list_for(&self, username: &str) -> RepoResult<Vec<EnrolledCourse>> {
        Ok(self.load()?.remove(username).unwrap_or_default())
    }

    fn add(&self, username: &str, course: &EnrolledCourse) -> RepoResult<()> {
        let mut map = self.load()?;
        let courses = map.entry(username.to_string()).or_default();
        if courses.iter().any(|entry| entry.name == course.name) {
            return Err(RepoError::DuplicateEnrollment {
                username: username.to_string(),
                course: course.name.clone(),
            });
        }

        courses.push(course.clone());
        self.save(&map)
    }

    fn remove(&self, username: &str, course_name: &str) -> RepoResult<()> {
        let mut map = self.load()?;
        let Some(courses) = map.get_mut(username) else {
            return Err(RepoError::EnrollmentNotFound {
                username: username.to_string(),
                course: course_name.to_string(),
            });
        };

        let Some(index) = courses.iter().position(|entry| entry.name == course_name) else {
            return Err(RepoError::EnrollmentNotFound {
                username: username.to_string(),
                course: course_name.to_string(),
            });
        };

        courses.remove(index);
        self.save(&map)
    }
}
