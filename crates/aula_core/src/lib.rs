//! Core domain logic for the Aula course-catalog application.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{format_clp, Category, Course};
pub use model::enrollment::{EnrolledCourse, EnrollmentMap};
pub use model::user::{NewUser, User, UserRole, UserValidationError};
pub use repo::catalog_repo::{CatalogRepository, StoreCatalogRepository};
pub use repo::enrollment_repo::{EnrollmentRepository, StoreEnrollmentRepository};
pub use repo::user_repo::{
    SessionRepository, StoreSessionRepository, StoreUserRepository, UserRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::auth_service::{AuthService, AuthServiceError, ProfileUpdate};
pub use service::catalog_service::{CatalogService, CatalogServiceError};
pub use service::enrollment_service::{EnrollmentService, EnrollmentServiceError};
pub use store::{open_store, open_store_in_memory, Store, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
