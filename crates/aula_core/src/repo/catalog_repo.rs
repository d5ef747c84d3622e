//! Catalog repository over the document store.
//!
//! # Responsibility
//! - Persist the category/course catalog under the `cursos` document.
//!
//! # Invariants
//! - The catalog is read and replaced as one whole document, matching the
//!   legacy GET-then-PUT of `cursos.json`.

use crate::model::catalog::Category;
use crate::repo::RepoResult;
use crate::store::{keys, Store};

/// Repository interface for the course catalog.
pub trait CatalogRepository {
    /// Loads the catalog document. `None` when never seeded.
    fn load(&self) -> RepoResult<Option<Vec<Category>>>;
    /// Replaces the full catalog document.
    fn replace(&self, categories: &[Category]) -> RepoResult<()>;
}

/// Store-backed catalog repository.
pub struct StoreCatalogRepository<'s> {
    store: &'s Store,
}

impl<'s> StoreCatalogRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }
}

impl CatalogRepository for StoreCatalogRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Category>>> {
        Ok(self.store.read_document(keys::CATALOG)?)
    }

    fn replace(&self, categories: &[Category]) -> RepoResult<()> {
        self.store.write_document(keys::CATALOG, &categories)?;
        Ok(())
    }
}
