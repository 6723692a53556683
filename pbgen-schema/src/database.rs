//! PocketBase database reader.
//!
//! Reads collections straight from the `_collections` table of a PocketBase
//! SQLite database (`pb_data/data.db`). The field list column holds the same
//! JSON as a collections export, so rows go through the export conversion.

use crate::error::ParseError;
use crate::parser::{RawCollection, RawField, build_schema};
use crate::types::Schema;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Table PocketBase stores collection definitions in.
const COLLECTIONS_TABLE: &str = "_collections";

/// One `_collections` row before its field list is decoded.
struct CollectionRow {
    id: Option<String>,
    name: Option<String>,
    collection_type: Option<String>,
    system: Option<bool>,
    fields: Option<String>,
}

/// Reads collections from a PocketBase SQLite database.
///
/// The database is opened read-only. Collections keep table order and fields
/// keep the order of their JSON column. Databases created before v0.23 store
/// fields in a `schema` column with nested options; both layouts are read.
///
/// # Arguments
/// * `path` - Path to the database file
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError::Database` if the database cannot be opened or queried,
/// `ParseError::InvalidStructure` if it has no collections table or a field
/// list is not valid JSON, and other `ParseError`s as [`crate::parse_schema`].
pub fn read_database(path: &Path) -> Result<Schema, ParseError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let columns = table_columns(&conn)?;
    if columns.is_empty() {
        return Err(ParseError::invalid_structure(format!(
            "no {COLLECTIONS_TABLE} table in {}",
            path.display()
        )));
    }
    let legacy = !columns.iter().any(|c| c == "fields");
    let fields_column = if legacy { "schema" } else { "fields" };

    let mut stmt = conn.prepare(&format!(
        "SELECT id, name, type, system, {fields_column} FROM {COLLECTIONS_TABLE}"
    ))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CollectionRow {
                id: row.get(0)?,
                name: row.get(1)?,
                collection_type: row.get(2)?,
                system: row.get(3)?,
                fields: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "read {} rows from {} ({} layout)",
        rows.len(),
        path.display(),
        if legacy { "legacy" } else { "current" }
    );

    let raw_collections = rows
        .into_iter()
        .map(|row| to_raw_collection(row, fields_column, legacy))
        .collect::<Result<Vec<_>, _>>()?;

    build_schema(raw_collections)
}

/// Returns the column names of the collections table, empty if it is missing.
fn table_columns(conn: &Connection) -> Result<Vec<String>, ParseError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({COLLECTIONS_TABLE})"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Decodes the field list of a row.
fn to_raw_collection(
    row: CollectionRow,
    column: &str,
    legacy: bool,
) -> Result<RawCollection, ParseError> {
    let fields = match row.fields.as_deref() {
        None | Some("") => Vec::new(),
        Some(json) => serde_json::from_str::<Vec<RawField>>(json).map_err(|e| {
            ParseError::invalid_structure(format!(
                "collection '{}' has a malformed {column} column: {e}",
                row.name.as_deref().unwrap_or("?")
            ))
        })?,
    };

    let (fields, schema) = if legacy {
        (None, Some(fields))
    } else {
        (Some(fields), None)
    };

    Ok(RawCollection {
        id: row.id,
        name: row.name,
        collection_type: row.collection_type,
        system: row.system.unwrap_or(false),
        fields,
        schema,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionType, FieldKind};
    use std::path::PathBuf;

    fn create_database(dir: &Path, ddl: &str) -> PathBuf {
        let path = dir.join("data.db");
        let conn = Connection::open(&path).expect("Failed to create database");
        conn.execute_batch(ddl).expect("Failed to populate database");
        path
    }

    const CURRENT_LAYOUT: &str = r#"
        CREATE TABLE _collections (
            id TEXT PRIMARY KEY NOT NULL,
            system BOOLEAN DEFAULT FALSE NOT NULL,
            type TEXT DEFAULT 'base' NOT NULL,
            name TEXT UNIQUE NOT NULL,
            fields JSON DEFAULT '[]' NOT NULL,
            indexes JSON DEFAULT '[]' NOT NULL
        );
        INSERT INTO _collections (id, system, type, name, fields) VALUES
            ('pbc_2', 0, 'base', 'blog posts',
             '[{"id": "t1", "name": "title", "type": "text", "required": true},
               {"id": "s1", "name": "status", "type": "select", "maxSelect": 1, "values": ["draft", "live"]},
               {"id": "r1", "name": "tags", "type": "relation", "maxSelect": 5, "collectionId": "pbc_1"}]'),
            ('_pb_users_auth_', 0, 'auth', 'users', '[{"id": "e1", "name": "email", "type": "email"}]'),
            ('pbc_1', 1, 'base', 'tags', '[]');
    "#;

    #[test]
    fn test_read_database_current_layout() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = create_database(dir.path(), CURRENT_LAYOUT);

        let schema = read_database(&path).expect("Failed to read database");

        let names: Vec<&str> = schema.collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["blog posts", "users", "tags"]);

        let posts = &schema.collections[0];
        assert_eq!(posts.id.as_deref(), Some("pbc_2"));
        let fields: Vec<&str> = posts.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, ["title", "status", "tags"]);
        assert_eq!(
            posts.fields[1].kind,
            FieldKind::Select {
                multiple: false,
                values: vec!["draft".to_string(), "live".to_string()],
            }
        );
        assert_eq!(
            posts.fields[2].kind,
            FieldKind::Relation {
                multiple: true,
                collection_id: "pbc_1".to_string(),
            }
        );

        assert_eq!(schema.collections[1].collection_type, CollectionType::Auth);
        assert!(schema.collections[2].system);
        assert!(schema.collections[2].fields.is_empty());
    }

    #[test]
    fn test_read_database_legacy_layout() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = create_database(
            dir.path(),
            r#"
            CREATE TABLE _collections (
                id TEXT PRIMARY KEY NOT NULL,
                system BOOLEAN DEFAULT FALSE NOT NULL,
                type TEXT DEFAULT 'base' NOT NULL,
                name TEXT UNIQUE NOT NULL,
                schema JSON DEFAULT '[]' NOT NULL
            );
            INSERT INTO _collections (id, system, type, name, schema) VALUES
                ('abc', 0, 'base', 'posts',
                 '[{"name": "author", "type": "relation", "options": {"collectionId": "users1", "maxSelect": null}},
                   {"name": "kind", "type": "select", "options": {"maxSelect": 1, "values": ["a", "b"]}}]');
            "#,
        );

        let schema = read_database(&path).expect("Failed to read database");
        let fields = &schema.collections[0].fields;
        assert_eq!(
            fields[0].kind,
            FieldKind::Relation {
                multiple: true,
                collection_id: "users1".to_string(),
            }
        );
        assert_eq!(fields[1].kind.is_multiple(), Some(false));
    }

    #[test]
    fn test_read_database_without_collections_table() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = create_database(dir.path(), "CREATE TABLE other (id TEXT);");

        let err = read_database(&path).unwrap_err();
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_read_database_malformed_fields() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = create_database(
            dir.path(),
            r#"
            CREATE TABLE _collections (id TEXT, system BOOLEAN, type TEXT, name TEXT, fields JSON);
            INSERT INTO _collections VALUES ('x', 0, 'base', 'broken', '[{');
            "#,
        );

        let err = read_database(&path).unwrap_err();
        assert!(err.to_string().contains("collection 'broken'"));
    }

    #[test]
    fn test_read_database_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = read_database(&dir.path().join("missing.db")).unwrap_err();
        assert!(matches!(err, ParseError::Database(_)));
    }
}
