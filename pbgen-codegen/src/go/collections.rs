//! Collection name constants generation.

use crate::error::CodegenError;
use crate::render::{COLLECTIONS_TEMPLATE, TemplateRenderer};
use pbgen_schema::ir::CollectionModel;
use serde::Serialize;

/// Generator for the file holding one constant per collection.
pub struct CollectionsGenerator<'a> {
    renderer: &'a TemplateRenderer,
    package: &'a str,
}

#[derive(Debug, Serialize)]
struct CollectionsContext<'a> {
    package: &'a str,
    collections: Vec<CollectionEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct CollectionEntry<'a> {
    model: &'a str,
    constant: String,
    name: &'a str,
}

impl<'a> CollectionsGenerator<'a> {
    /// Creates a new collections generator.
    #[must_use]
    pub const fn new(renderer: &'a TemplateRenderer, package: &'a str) -> Self {
        Self { renderer, package }
    }

    /// Generates the constants file, keeping the order of `models`.
    ///
    /// # Errors
    /// Returns `CodegenError::Template` if rendering fails.
    pub fn generate(&self, models: &[CollectionModel]) -> Result<String, CodegenError> {
        let context = CollectionsContext {
            package: self.package,
            collections: models
                .iter()
                .map(|m| CollectionEntry {
                    model: &m.name,
                    constant: m.collection_constant(),
                    name: &m.collection_name,
                })
                .collect(),
        };

        self.renderer.render(COLLECTIONS_TEMPLATE, &context)
    }
}
