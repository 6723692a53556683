//! Generation orchestrator.
//!
//! Drives resolution, collision checks and rendering over a whole schema and
//! returns every generated file keyed by its path relative to the output
//! directory. Nothing is written to disk here.

use crate::error::CodegenError;
use crate::go::{CollectionsGenerator, ModelGenerator};
use crate::render::{TemplateRenderer, Templates};
use pbgen_schema::{Schema, SchemaIr, is_go_keyword, to_file_case, validate_models};
use std::collections::BTreeMap;

/// Name of the file holding the collection constants.
pub const COLLECTIONS_FILE: &str = "collections.go";

/// Default output package name.
pub const DEFAULT_PACKAGE: &str = "collections";

/// Generated files keyed by relative path.
pub type GeneratedFiles = BTreeMap<String, String>;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Output package name; normalized to snake case.
    pub package_name: String,
    /// Templates to render with.
    pub templates: Templates,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            templates: Templates::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the default package and templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output package name.
    #[must_use]
    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// Sets the templates.
    #[must_use]
    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }
}

/// Schema to Go code generator.
#[derive(Debug)]
pub struct Generator {
    package: String,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Creates a generator, compiling its templates.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidPackageName` if the normalized package name
    /// is a Go keyword or starts with a digit, and `CodegenError::Template` if
    /// a template has invalid syntax.
    pub fn new(config: GeneratorConfig) -> Result<Self, CodegenError> {
        let package = to_file_case(&config.package_name);
        if is_go_keyword(&package) {
            return Err(CodegenError::invalid_package(package, "is a Go keyword"));
        }
        if package.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(CodegenError::invalid_package(package, "starts with a digit"));
        }

        Ok(Self {
            package,
            renderer: TemplateRenderer::new(config.templates)?,
        })
    }

    /// Returns the normalized output package name.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Generates all files for a schema.
    ///
    /// An empty schema yields no files. Any error aborts the whole run; no
    /// partial output is returned.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` for unknown field kinds or identifier
    /// collisions, and `CodegenError::Template` if rendering fails.
    pub fn generate(&self, schema: &Schema) -> Result<GeneratedFiles, CodegenError> {
        if schema.is_empty() {
            tracing::warn!("no collections found, nothing to generate");
            return Ok(GeneratedFiles::new());
        }

        let ir = SchemaIr::from_schema(schema)?;
        self.generate_ir(&ir)
    }

    /// Generates all files for an already resolved schema.
    ///
    /// # Errors
    /// See [`Self::generate`].
    pub fn generate_ir(&self, ir: &SchemaIr) -> Result<GeneratedFiles, CodegenError> {
        let mut files = GeneratedFiles::new();
        if ir.is_empty() {
            return Ok(files);
        }

        validate_models(ir, &[(COLLECTIONS_FILE, "collection constants")])?;

        let models = ModelGenerator::new(&self.renderer, &self.package);
        for model in &ir.models {
            let content = models.generate(model)?;
            tracing::debug!(
                "rendered {} for collection '{}'",
                model.file_name(),
                model.collection_name
            );
            files.insert(model.file_name(), content);
        }

        let collections = CollectionsGenerator::new(&self.renderer, &self.package);
        files.insert(COLLECTIONS_FILE.to_string(), collections.generate(&ir.models)?);

        tracing::info!(
            "generated {} files for {} collections in package {}",
            files.len(),
            ir.models.len(),
            self.package
        );
        Ok(files)
    }
}
