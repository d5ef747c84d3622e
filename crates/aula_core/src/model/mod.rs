//! Domain records for accounts, catalog, and enrollments.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep serialized field names compatible with the legacy JSON documents.
//!
//! # Invariants
//! - Users are identified by their `username`; it never changes after
//!   registration.
//! - Course `is_enrolled` is derived state, recomputed at load time.

pub mod catalog;
pub mod enrollment;
pub mod user;
