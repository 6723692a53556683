//! Template rendering.
//!
//! Templates are plain configuration values handed to the renderer, so
//! renderers with different templates can coexist. Both templates are
//! compiled when the renderer is built; rendering itself is stateless.

use crate::error::CodegenError;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;

/// Name of the per-collection template.
pub const MODEL_TEMPLATE: &str = "model.go.j2";

/// Name of the collection constants template.
pub const COLLECTIONS_TEMPLATE: &str = "collections.go.j2";

/// Template sources used by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Per-collection template source.
    pub model: String,
    /// Collection constants template source.
    pub collections: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            model: include_str!("../templates/model.go.j2").to_string(),
            collections: include_str!("../templates/collections.go.j2").to_string(),
        }
    }
}

impl Templates {
    /// Loads template overrides from a directory.
    ///
    /// Looks for [`MODEL_TEMPLATE`] and [`COLLECTIONS_TEMPLATE`]; a missing
    /// file falls back to the built-in template.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the directory or an existing template
    /// cannot be read.
    pub fn from_dir(dir: &Path) -> Result<Self, CodegenError> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("template directory '{}' not found", dir.display()),
            )
            .into());
        }

        let mut templates = Self::default();
        if let Some(model) = read_optional(&dir.join(MODEL_TEMPLATE))? {
            templates.model = model;
        }
        if let Some(collections) = read_optional(&dir.join(COLLECTIONS_TEMPLATE))? {
            templates.collections = collections;
        }
        Ok(templates)
    }
}

/// Reads a file, returning `None` if it does not exist.
fn read_optional(path: &Path) -> Result<Option<String>, CodegenError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("using template override {}", path.display());
            Ok(Some(content))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Compiled templates.
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Compiles the given templates.
    ///
    /// # Errors
    /// Returns `CodegenError::Template` if a template has invalid syntax.
    pub fn new(templates: Templates) -> Result<Self, CodegenError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("go_string", go_string);

        env.add_template_owned(MODEL_TEMPLATE, templates.model)?;
        env.add_template_owned(COLLECTIONS_TEMPLATE, templates.collections)?;

        Ok(Self { env })
    }

    /// Renders a named template with the given context.
    ///
    /// # Errors
    /// Returns `CodegenError::Template` if the template is unknown or refers to
    /// a value missing from the context.
    pub fn render<S: Serialize>(&self, name: &str, context: &S) -> Result<String, CodegenError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }
}

/// `go_string` filter: formats a value as a Go string literal.
fn go_string(value: String) -> String {
    pbgen_schema::go_string_literal(&value)
}
