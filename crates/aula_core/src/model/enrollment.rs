//! Enrollment records: the stored association between a user and a course.
//!
//! # Responsibility
//! - Define the per-user enrolled-course record and the full enrollment map.
//!
//! # Invariants
//! - Serialized field names match the legacy `inscripcionesPorUsuario`
//!   document (`nombre`, `descripcion`, `profesor`, `precio`).
//! - A user's list never holds two records with the same course name.

use crate::model::catalog::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map from username to that user's enrolled courses.
///
/// `BTreeMap` keeps the serialized document deterministic.
pub type EnrollmentMap = BTreeMap<String, Vec<EnrolledCourse>>;

/// One course a user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    /// Course title; the lookup key within a user's list.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Course summary, copied from the catalog at enrollment time.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Instructor, copied from the catalog at enrollment time.
    #[serde(rename = "profesor", default)]
    pub instructor: String,
    /// Display price at enrollment time, e.g. `$12.345 CLP`.
    #[serde(rename = "precio", default)]
    pub price: String,
}

impl From<&Course> for EnrolledCourse {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone(),
            instructor: course.instructor.clone(),
            price: course.price.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnrolledCourse;
    use crate::model::catalog::Course;

    #[test]
    fn enrollment_record_serializes_with_legacy_field_names() {
        let record = EnrolledCourse::from(&Course::new(
            "Marketing Digital",
            "Conceptos y estrategias de marketing digital.",
            "Prof. María López",
            "$9.990 CLP",
        ));
        let json = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(json["nombre"], "Marketing Digital");
        assert!(json.get("descripcion").is_some());
        assert_eq!(json["profesor"], "Prof. María López");
        assert_eq!(json["precio"], "$9.990 CLP");
    }

    #[test]
    fn legacy_records_without_instructor_or_price_still_decode() {
        let record: EnrolledCourse = serde_json::from_str(
            r#"{"nombre":"Fotografía Básica","descripcion":"Fundamentos de fotografía."}"#,
        )
        .expect("legacy record decodes");
        assert_eq!(record.name, "Fotografía Básica");
        assert!(record.instructor.is_empty());
        assert!(record.price.is_empty());
    }
}
