//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `aula_core` linkage.
//! - Keep output deterministic enough for quick local sanity checks.

use aula_core::{CatalogService, StoreCatalogRepository, StoreEnrollmentRepository};

fn main() {
    println!("aula_core version={}", aula_core::core_version());

    match aula_core::open_store_in_memory() {
        Ok(store) => {
            let catalog = CatalogService::new(
                StoreCatalogRepository::new(&store),
                StoreEnrollmentRepository::new(&store),
            );
            match catalog
                .seed_default_catalog()
                .and_then(|_| catalog.categories(None))
            {
                Ok(categories) => println!("seeded categories={}", categories.len()),
                Err(err) => eprintln!("catalog smoke check failed: {err}"),
            }
        }
        Err(err) => eprintln!("store smoke check failed: {err}"),
    }
}
