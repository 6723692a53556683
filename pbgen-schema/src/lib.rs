//! # pbgen Schema
//!
//! PocketBase schema reading and resolution.
//!
//! This crate provides:
//! - Reading of PocketBase collections exports and `_collections` tables
//! - Type definitions for collections and field kinds
//! - Identifier normalization for generated names
//! - Field type resolution into an intermediate representation
//! - Identifier collision validation

pub mod database;
pub mod error;
pub mod imports;
pub mod ir;
pub mod naming;
pub mod parser;
pub mod types;
pub mod validation;

pub use database::read_database;
pub use error::{ParseError, SchemaError};
pub use imports::{Import, ImportSet};
pub use ir::{CollectionModel, GoType, Getter, ResolvedField, SchemaIr};
pub use naming::{
    go_string_literal, is_go_keyword, to_exported_case, to_file_case, to_source_file_stem,
};
pub use parser::{parse_schema, read_schema};
pub use types::{CollectionDef, CollectionType, FieldDef, FieldKind, Schema};
pub use validation::validate_models;
