//! # pbgen Codegen
//!
//! Go code generation from PocketBase collection schemas.
//!
//! This crate provides:
//! - One record proxy file per collection with typed getters and setters
//! - A collection name constants file
//! - Template loading and rendering
//!
//! Generation is pure: results are returned as a map of relative file paths
//! to contents and never written to disk here.

pub mod error;
pub mod generator;
pub mod go;
pub mod render;

pub use error::CodegenError;
pub use generator::{COLLECTIONS_FILE, GeneratedFiles, Generator, GeneratorConfig};
pub use render::{TemplateRenderer, Templates};

/// Generates Go files from a PocketBase collections export string.
///
/// # Arguments
/// * `json` - Collections export content
/// * `config` - Generator configuration
///
/// # Returns
/// Generated files keyed by relative path.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution, or rendering fails.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedFiles, CodegenError> {
    let schema = pbgen_schema::parse_schema(json)?;
    Generator::new(config.clone())?.generate(&schema)
}

/// Generates Go files from a PocketBase collections export file.
///
/// # Arguments
/// * `path` - Path to the collections export
/// * `config` - Generator configuration
///
/// # Returns
/// Generated files keyed by relative path.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution, or rendering fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<GeneratedFiles, CodegenError> {
    let schema = pbgen_schema::read_schema(path)?;
    Generator::new(config.clone())?.generate(&schema)
}
