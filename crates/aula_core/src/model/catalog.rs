//! Catalog model: categories, courses, and CLP price formatting.
//!
//! # Responsibility
//! - Define the category/course records stored under the `cursos` document.
//! - Provide the default seed catalog with randomized prices.
//!
//! # Invariants
//! - Serialized field names match the legacy catalog JSON (`profesor`,
//!   `precio`, `isEnrolled`).
//! - `is_enrolled` is never trusted from storage; loaders recompute it.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SEED_PRICE_MIN_CLP: u32 = 5_000;
const SEED_PRICE_MAX_CLP: u32 = 30_000;

/// One course offering inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course title; unique within the catalog in practice.
    pub name: String,
    /// Short human-readable summary.
    pub description: String,
    /// Serialized as `profesor` to match the legacy schema.
    #[serde(rename = "profesor")]
    pub instructor: String,
    /// Display price string, e.g. `$12.345 CLP`.
    #[serde(rename = "precio")]
    pub price: String,
    /// Derived per-viewer flag; recomputed on every catalog load.
    #[serde(rename = "isEnrolled", default)]
    pub is_enrolled: bool,
}

impl Course {
    /// Creates a catalog course with the enrolled flag cleared.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructor: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instructor: instructor.into(),
            price: price.into(),
            is_enrolled: false,
        }
    }
}

/// A grouping of courses shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short stable identifier, e.g. `programacion`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon asset path carried over from the web UI.
    pub icon: String,
    /// Courses offered under this category.
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Formats whole Chilean pesos as the UI string `$12.345 CLP`.
///
/// Thousands are dot-grouped following the es-CL locale the original
/// application rendered with.
pub fn format_clp(amount: u32) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("${grouped} CLP")
}

/// Draws a seed price uniformly from the legacy range [5000, 30000) CLP.
pub fn random_price() -> String {
    let amount = rand::thread_rng().gen_range(SEED_PRICE_MIN_CLP..SEED_PRICE_MAX_CLP);
    format_clp(amount)
}

/// Builds the six-category default catalog shipped with the application.
///
/// Prices are randomized per call; callers persist the result once and
/// reuse the stored document afterwards.
pub fn default_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, icon: &str, courses: Vec<Course>| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        courses,
    };

    vec![
        category(
            "programacion",
            "Programación",
            "./assets/img/iconcode.png",
            vec![
                Course::new(
                    "Python para Principiantes",
                    "Aprende a programar en Python desde cero.",
                    "Prof. Laura Gómez",
                    random_price(),
                ),
                Course::new(
                    "JavaScript Básico",
                    "Fundamentos de JavaScript para desarrollo web.",
                    "Prof. Carlos Pérez",
                    random_price(),
                ),
            ],
        ),
        category(
            "marketing",
            "Marketing",
            "./assets/img/iconmarketing.png",
            vec![Course::new(
                "Marketing Digital",
                "Conceptos y estrategias de marketing digital.",
                "Prof. María López",
                random_price(),
            )],
        ),
        category(
            "ventas",
            "Ventas",
            "./assets/img/iconventa.png",
            vec![Course::new(
                "Técnicas de Ventas",
                "Aprende técnicas avanzadas de ventas.",
                "Prof. Javier Ortega",
                random_price(),
            )],
        ),
        category(
            "cloud",
            "Cloud Computing",
            "./assets/img/iconcloud.png",
            vec![Course::new(
                "Introducción a AWS",
                "Conoce los servicios de Amazon Web Services.",
                "Prof. Javier Ortega",
                random_price(),
            )],
        ),
        category(
            "ing",
            "Ingeniería",
            "./assets/img/iconeng.png",
            vec![Course::new(
                "Ingeniería de Datos",
                "Introducción a la ingeniería de datos.",
                "Prof. Javier Ortega",
                random_price(),
            )],
        ),
        category(
            "arcr",
            "Arte/Creativo",
            "./assets/img/iconarte.png",
            vec![Course::new(
                "Fotografía Básica",
                "Fundamentos de fotografía y uso de cámaras.",
                "Prof. Javier Ortega",
                random_price(),
            )],
        ),
    ]
}
