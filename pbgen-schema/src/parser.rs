//! PocketBase collections export reader.
//!
//! This module reads the JSON produced by PocketBase's "Export collections"
//! (also the shape stored in the `_collections` table) into the internal
//! schema representation. Collection and field order are preserved.

use crate::error::ParseError;
use crate::types::{CollectionDef, CollectionType, FieldDef, FieldKind, Schema};
use serde::Deserialize;
use std::path::Path;

/// Top-level document: a bare array or an object wrapping it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<RawCollection>),
    Wrapped { collections: Vec<RawCollection> },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCollection {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    #[serde(rename = "type")]
    pub(crate) collection_type: Option<String>,
    #[serde(default)]
    pub(crate) system: bool,
    pub(crate) fields: Option<Vec<RawField>>,
    /// Field list key used by exports older than v0.23.
    pub(crate) schema: Option<Vec<RawField>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawField {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    max_select: Option<u64>,
    values: Option<Vec<String>>,
    collection_id: Option<String>,
    /// Kind-specific attributes as nested by exports older than v0.23.
    options: Option<RawOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    max_select: Option<u64>,
    values: Option<Vec<String>>,
    collection_id: Option<String>,
}

/// Parses a PocketBase collections export from a string.
///
/// # Arguments
/// * `json` - Export content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a collection or field
/// lacks a required attribute.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let document: RawDocument = serde_json::from_str(json)?;
    let raw_collections = match document {
        RawDocument::List(collections) | RawDocument::Wrapped { collections } => collections,
    };

    build_schema(raw_collections)
}

/// Converts raw collections into a schema, keeping their order.
pub(crate) fn build_schema(raw_collections: Vec<RawCollection>) -> Result<Schema, ParseError> {
    let mut schema = Schema::new();
    for (index, raw) in raw_collections.into_iter().enumerate() {
        schema.add_collection(parse_collection(raw, index)?);
    }

    tracing::debug!("parsed {} collections", schema.collections.len());
    Ok(schema)
}

/// Reads and parses a PocketBase collections export file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn read_schema(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}

/// Converts one collection object.
fn parse_collection(raw: RawCollection, index: usize) -> Result<CollectionDef, ParseError> {
    let name = raw
        .name
        .ok_or_else(|| ParseError::missing_attr(format!("collection #{index}"), "name"))?;

    let collection_type = match raw.collection_type.as_deref() {
        None => CollectionType::Base,
        Some(value) => CollectionType::parse(value).ok_or_else(|| {
            ParseError::invalid_structure(format!(
                "collection '{name}' has unknown type '{value}'"
            ))
        })?,
    };

    let legacy = raw.fields.is_none();
    let raw_fields = raw.fields.or(raw.schema).unwrap_or_default();

    let mut collection = CollectionDef::new(name);
    collection.id = raw.id;
    collection.collection_type = collection_type;
    collection.system = raw.system;

    for (index, raw_field) in raw_fields.into_iter().enumerate() {
        let field = parse_field(&collection.name, raw_field, index, legacy)?;
        collection.add_field(field);
    }

    Ok(collection)
}

/// Converts one field object.
fn parse_field(
    collection: &str,
    raw: RawField,
    index: usize,
    legacy: bool,
) -> Result<FieldDef, ParseError> {
    let name = raw.name.ok_or_else(|| {
        ParseError::missing_attr(format!("collection '{collection}' field #{index}"), "name")
    })?;
    let element = || format!("collection '{collection}' field '{name}'");

    let tag = raw.kind.ok_or_else(|| ParseError::missing_attr(element(), "type"))?;

    let (max_select, values, collection_id) = match raw.options {
        Some(options) => (
            raw.max_select.or(options.max_select),
            raw.values.or(options.values),
            raw.collection_id.or(options.collection_id),
        ),
        None => (raw.max_select, raw.values, raw.collection_id),
    };
    let multiple = max_select.is_some_and(|max| max > 1);

    let kind = match tag.as_str() {
        "text" => FieldKind::Text,
        "editor" => FieldKind::Editor,
        "url" => FieldKind::Url,
        "email" => FieldKind::Email,
        "password" => FieldKind::Password,
        "number" => FieldKind::Number,
        "bool" => FieldKind::Bool,
        "date" => FieldKind::Date,
        "autodate" => FieldKind::Autodate,
        "json" => FieldKind::Json,
        "file" => FieldKind::File { multiple },
        "select" => FieldKind::Select {
            multiple,
            values: values.unwrap_or_default(),
        },
        "relation" => FieldKind::Relation {
            // Legacy exports leave maxSelect unset for unbounded relations.
            multiple: multiple || (legacy && max_select.is_none()),
            collection_id: collection_id
                .ok_or_else(|| ParseError::missing_attr(element(), "collectionId"))?,
        },
        _ => FieldKind::Unknown(tag.clone()),
    };

    Ok(FieldDef::new(name, kind))
}
