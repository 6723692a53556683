//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parse error.
    #[error("schema parse error: {0}")]
    Parse(#[from] pbgen_schema::ParseError),

    /// Schema resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] pbgen_schema::SchemaError),

    /// Template syntax or rendering error.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Output package name is not a valid Go package name.
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName {
        /// Normalized package name.
        name: String,
        /// Why the name is rejected.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates an invalid package name error.
    pub fn invalid_package(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPackageName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
