//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from document keys and storage details.

pub mod auth_service;
pub mod catalog_service;
pub mod enrollment_service;
