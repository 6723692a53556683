//! Identifier collision checks.
//!
//! Distinct schema names can normalize to the same generated identifier. These
//! checks run on the built models before anything is rendered, so a collision
//! aborts the run instead of one generated file silently replacing another.

use crate::error::SchemaError;
use crate::ir::{CollectionModel, SchemaIr};
use std::collections::HashMap;

/// Validates a schema representation for identifier collisions.
///
/// # Arguments
/// * `ir` - The models to validate
/// * `reserved_files` - File names already taken by other generated files,
///   paired with a description used in the error
///
/// Type names, file names and field names are checked first, then every
/// package-level identifier against all others, since all generated files
/// share one Go package.
///
/// # Errors
/// Returns `SchemaError::DuplicateIdentifier` for the first collision found.
pub fn validate_models(
    ir: &SchemaIr,
    reserved_files: &[(&str, &str)],
) -> Result<(), SchemaError> {
    validate_type_names(ir)?;
    validate_file_names(ir, reserved_files)?;
    for model in &ir.models {
        validate_fields(model).map_err(|e| e.in_collection(&model.collection_name))?;
    }
    validate_package_scope(ir)
}

/// Validates that no two collections share an exported type name.
fn validate_type_names(ir: &SchemaIr) -> Result<(), SchemaError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for model in &ir.models {
        if let Some(first) = seen.insert(&model.name, &model.collection_name) {
            return Err(SchemaError::duplicate(
                "type",
                &model.name,
                first,
                &model.collection_name,
            ));
        }
    }

    Ok(())
}

/// Validates that no two generated files share a name.
fn validate_file_names(
    ir: &SchemaIr,
    reserved_files: &[(&str, &str)],
) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, &str> = reserved_files
        .iter()
        .map(|&(file, owner)| (file.to_string(), owner))
        .collect();

    for model in &ir.models {
        if let Some(first) = seen.insert(model.file_name(), &model.collection_name) {
            return Err(SchemaError::duplicate(
                "file",
                model.file_name(),
                first,
                &model.collection_name,
            ));
        }
    }

    Ok(())
}

/// Validates that no two fields of a collection share accessor names.
fn validate_fields(model: &CollectionModel) -> Result<(), SchemaError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for field in &model.fields {
        if let Some(first) = seen.insert(&field.exported_name, &field.name) {
            return Err(SchemaError::duplicate(
                "field",
                &field.exported_name,
                first,
                &field.name,
            ));
        }
    }

    Ok(())
}

/// Validates that no two package-level declarations share an identifier.
fn validate_package_scope(ir: &SchemaIr) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, String> = HashMap::new();

    for model in &ir.models {
        for (ident, owner) in model.package_identifiers() {
            if let Some(first) = seen.get(&ident) {
                return Err(SchemaError::duplicate("package", &ident, first, &owner));
            }
            seen.insert(ident, owner);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionDef, FieldDef, FieldKind, Schema};

    fn ir_of(collections: Vec<CollectionDef>) -> SchemaIr {
        let schema = Schema { collections };
        SchemaIr::from_schema(&schema).expect("Failed to build IR")
    }

    #[test]
    fn test_validate_distinct_names() {
        let ir = ir_of(vec![
            CollectionDef::new("posts").with_field(FieldDef::new("title", FieldKind::Text)),
            CollectionDef::new("users").with_field(FieldDef::new("title", FieldKind::Text)),
        ]);

        assert!(validate_models(&ir, &[]).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type_name() {
        let ir = ir_of(vec![
            CollectionDef::new("blog_posts"),
            CollectionDef::new("blog posts"),
        ]);

        let err = validate_models(&ir, &[]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateIdentifier { ref kind, ref name, ref first, ref second }
                if kind == "type" && name == "BlogPosts" && first == "blog_posts" && second == "blog posts"
        ));
    }

    #[test]
    fn test_validate_duplicate_file_name() {
        let ir = ir_of(vec![CollectionDef::new("Collections")]);
        let reserved = [("collections.go", "collection constants")];
        let err = validate_models(&ir, &reserved).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateIdentifier { ref kind, ref first, .. }
                if kind == "file" && first == "collection constants"
        ));
    }

    #[test]
    fn test_validate_duplicate_field_name() {
        let ir = ir_of(vec![
            CollectionDef::new("posts")
                .with_field(FieldDef::new("user_id", FieldKind::Text))
                .with_field(FieldDef::new("userId", FieldKind::Text)),
        ]);

        let err = validate_models(&ir, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "collection 'posts': duplicate field identifier 'UserId' derived from 'user_id' and 'userId'"
        );
    }

    fn package_collision(collections: Vec<CollectionDef>) -> (String, String, String) {
        let err = validate_models(&ir_of(collections), &[]).unwrap_err();
        match err {
            SchemaError::DuplicateIdentifier {
                kind,
                name,
                first,
                second,
            } => {
                assert_eq!(kind, "package");
                (name, first, second)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_type_against_collection_constant() {
        let (name, first, second) = package_collision(vec![
            CollectionDef::new("posts"),
            CollectionDef::new("collection posts"),
        ]);

        assert_eq!(name, "CollectionPosts");
        assert_eq!(first, "posts (collection constant)");
        assert_eq!(second, "collection posts (type)");
    }

    #[test]
    fn test_validate_type_against_constructor() {
        let (name, first, second) = package_collision(vec![
            CollectionDef::new("posts"),
            CollectionDef::new("new posts"),
        ]);

        assert_eq!(name, "NewPosts");
        assert_eq!(first, "posts (constructor)");
        assert_eq!(second, "new posts (type)");
    }

    #[test]
    fn test_validate_type_against_field_constant() {
        let (name, first, second) = package_collision(vec![
            CollectionDef::new("posts").with_field(FieldDef::new("title", FieldKind::Text)),
            CollectionDef::new("posts field title"),
        ]);

        assert_eq!(name, "PostsFieldTitle");
        assert_eq!(first, "posts (field constant of title)");
        assert_eq!(second, "posts field title (type)");
    }

    #[test]
    fn test_validate_package_scope_message() {
        let ir = ir_of(vec![CollectionDef::new("new posts"), CollectionDef::new("posts")]);
        let err = validate_models(&ir, &[]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "duplicate package identifier 'NewPosts' derived from 'new posts (type)' and 'posts (constructor)'"
        );
    }

    #[test]
    fn test_validate_special_file_suffix_collision() {
        let ir = ir_of(vec![
            CollectionDef::new("login test"),
            CollectionDef::new("login_test_collection"),
        ]);

        let err = validate_models(&ir, &[]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateIdentifier { ref kind, ref name, .. }
                if kind == "file" && name == "login_test_collection.go"
        ));
    }
}
