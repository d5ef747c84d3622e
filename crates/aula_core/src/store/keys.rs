//! Fixed document keys.
//!
//! # Responsibility
//! - Name every logical document the application persists.
//!
//! # Invariants
//! - Key strings are kept byte-for-byte identical to the legacy web
//!   application so existing exported data stays readable.

/// Full registered-user list (JSON array).
pub const USERS: &str = "usuarios";

/// Snapshot of the currently logged-in user (single JSON object).
pub const SESSION: &str = "usuarioLogueado";

/// Map from username to that user's enrolled course list (JSON object).
pub const ENROLLMENTS: &str = "inscripcionesPorUsuario";

/// Category/course catalog (JSON array).
pub const CATALOG: &str = "cursos";

/// Admin-session marker, present only while an admin is logged in.
pub const SUPERUSER: &str = "superuser";
