//! Catalog use-case service: browsing, seeding, and admin mutations.
//!
//! # Responsibility
//! - Serve the catalog with per-viewer enrollment flags recomputed.
//! - Gate whole-catalog mutations behind the admin role.
//!
//! # Invariants
//! - `is_enrolled` flags are derived from the viewer's enrollment list on
//!   every load; stored values are ignored.
//! - Mutations follow load-whole-catalog, edit, replace-whole-catalog.
//! - Seeding never overwrites an existing catalog document.

use crate::model::catalog::{default_categories, Category, Course};
use crate::model::user::User;
use crate::repo::catalog_repo::CatalogRepository;
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::RepoError;
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from catalog use-cases.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Acting user is not an admin.
    NotAuthorized(String),
    /// No category with the given id.
    CategoryNotFound(String),
    /// Category exists but the course index is out of range.
    CourseNotFound { category: String, index: usize },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized(username) => {
                write!(f, "user `{username}` may not modify the catalog")
            }
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::CourseNotFound { category, index } => {
                write!(f, "no course at index {index} in category `{category}`")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CatalogServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Catalog service facade over catalog and enrollment repositories.
pub struct CatalogService<C: CatalogRepository, E: EnrollmentRepository> {
    catalog: C,
    enrollments: E,
}

impl<C: CatalogRepository, E: EnrollmentRepository> CatalogService<C, E> {
    /// Creates a service using the provided repository implementations.
    pub fn new(catalog: C, enrollments: E) -> Self {
        Self {
            catalog,
            enrollments,
        }
    }

    /// Loads all categories with enrollment flags for `viewer`.
    ///
    /// A logged-out viewer (`None`) sees every course unenrolled.
    pub fn categories(&self, viewer: Option<&str>) -> Result<Vec<Category>, CatalogServiceError> {
        let categories = self.catalog.load()?.unwrap_or_default();
        Ok(self.flag_enrollments(categories, viewer)?)
    }

    /// Loads one category by id with enrollment flags for `viewer`.
    pub fn category(
        &self,
        id: &str,
        viewer: Option<&str>,
    ) -> Result<Option<Category>, CatalogServiceError> {
        Ok(self
            .categories(viewer)?
            .into_iter()
            .find(|category| category.id == id))
    }

    /// Writes the default catalog when no catalog document exists yet.
    ///
    /// Returns `true` when seeding happened.
    pub fn seed_default_catalog(&self) -> Result<bool, CatalogServiceError> {
        if self.catalog.load()?.is_some() {
            return Ok(false);
        }

        let categories = default_categories();
        self.catalog.replace(&categories)?;
        info!(
            "event=catalog_seed module=catalog status=ok categories={}",
            categories.len()
        );
        Ok(true)
    }

    /// Appends a course to a category. Admin only.
    pub fn add_course(
        &self,
        acting_user: &User,
        category_id: &str,
        course: Course,
    ) -> Result<(), CatalogServiceError> {
        self.require_admin(acting_user)?;
        self.mutate_category(category_id, |courses| {
            courses.push(course);
            Ok(())
        })
    }

    /// Replaces the course at `index` within a category. Admin only.
    pub fn update_course(
        &self,
        acting_user: &User,
        category_id: &str,
        index: usize,
        course: Course,
    ) -> Result<(), CatalogServiceError> {
        self.require_admin(acting_user)?;
        let category = category_id.to_string();
        self.mutate_category(category_id, move |courses| {
            let Some(slot) = courses.get_mut(index) else {
                return Err(CatalogServiceError::CourseNotFound { category, index });
            };
            *slot = course;
            Ok(())
        })
    }

    /// Removes the course at `index` within a category. Admin only.
    pub fn remove_course(
        &self,
        acting_user: &User,
        category_id: &str,
        index: usize,
    ) -> Result<(), CatalogServiceError> {
        self.require_admin(acting_user)?;
        let category = category_id.to_string();
        self.mutate_category(category_id, move |courses| {
            if index >= courses.len() {
                return Err(CatalogServiceError::CourseNotFound { category, index });
            }
            courses.remove(index);
            Ok(())
        })
    }

    fn require_admin(&self, acting_user: &User) -> Result<(), CatalogServiceError> {
        if !acting_user.is_admin() {
            return Err(CatalogServiceError::NotAuthorized(
                acting_user.username.clone(),
            ));
        }
        Ok(())
    }

    fn mutate_category(
        &self,
        category_id: &str,
        edit: impl FnOnce(&mut Vec<Course>) -> Result<(), CatalogServiceError>,
    ) -> Result<(), CatalogServiceError> {
        let mut categories = self.catalog.load()?.unwrap_or_default();
        let Some(category) = categories
            .iter_mut()
            .find(|category| category.id == category_id)
        else {
            return Err(CatalogServiceError::CategoryNotFound(
                category_id.to_string(),
            ));
        };

        edit(&mut category.courses)?;
        self.catalog.replace(&categories)?;
        Ok(())
    }

    fn flag_enrollments(
        &self,
        mut categories: Vec<Category>,
        viewer: Option<&str>,
    ) -> Result<Vec<Category>, RepoError> {
        let enrolled: HashSet<String> = match viewer {
            Some(username) => self
                .enrollments
                .list_for(username)?
                .into_iter()
                .map(|entry| entry.name)
                .collect(),
            None => HashSet::new(),
        };

        for category in &mut categories {
            for course in &mut category.courses {
                course.is_enrolled = enrolled.contains(&course.name);
            }
        }
        Ok(categories)
    }
}
