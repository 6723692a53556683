//! # pbgen
//!
//! Typed Go record accessors generated from PocketBase collection schemas.
//!
//! Each collection of a PocketBase schema becomes a Go file declaring a record
//! proxy type with one typed getter and setter per field, plus a shared file of
//! collection name constants.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pbgen::prelude::*;
//!
//! let schema = read_schema("pb_schema.json".as_ref())?;
//! let files = Generator::new(GeneratorConfig::default())?.generate(&schema)?;
//! write_files("collections".as_ref(), &files)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema reading, naming and type resolution
//! - [`codegen`] - Go code generation from schemas
//! - [`cli`] - Command-line interface of the `pb-gen` binary
//! - [`output`] - Writing generated files to disk

pub mod cli;
pub mod output;
pub mod prelude;

/// Schema reading and resolution.
pub mod schema {
    pub use pbgen_schema::*;
}

/// Go code generation from schemas.
pub mod codegen {
    pub use pbgen_codegen::*;
}
