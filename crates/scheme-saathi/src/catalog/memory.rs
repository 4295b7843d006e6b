use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use super::{CatalogError, SchemeCatalog};
use crate::eligibility::Scheme;

/// Catalog held in memory, typically loaded once from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemeCatalog {
    schemes: Vec<Scheme>,
}

impl InMemorySchemeCatalog {
    pub fn new(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for scheme in &schemes {
            if !seen.insert(scheme.scheme_id.as_str()) {
                return Err(CatalogError::DuplicateScheme(scheme.scheme_id.clone()));
            }
        }
        Ok(Self { schemes })
    }

    /// Parse a JSON array of schemes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_reader(reader)?;
        Self::new(schemes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            schemes = catalog.len(),
            "scheme catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl SchemeCatalog for InMemorySchemeCatalog {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError> {
        Ok(self.schemes.clone())
    }

    fn fetch(&self, scheme_id: &str) -> Result<Option<Scheme>, CatalogError> {
        Ok(self
            .schemes
            .iter()
            .find(|scheme| scheme.scheme_id == scheme_id)
            .cloned())
    }
}
