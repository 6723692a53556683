//! Prelude module for convenient imports.
//!
//! ```ignore
//! use pbgen::prelude::*;
//! ```

// Schema types
pub use pbgen_schema::{
    CollectionDef, CollectionModel, CollectionType, FieldDef, FieldKind, ParseError, Schema,
    SchemaError, SchemaIr, parse_schema, read_database, read_schema,
};

// Codegen types
pub use pbgen_codegen::{
    CodegenError, GeneratedFiles, Generator, GeneratorConfig, Templates, generate_from_file,
    generate_from_json,
};

// Output
pub use crate::output::write_files;
