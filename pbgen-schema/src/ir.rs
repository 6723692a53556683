//! Intermediate representation for code generation.
//!
//! This module resolves every schema field to the Go type and record accessor
//! used to read it, and groups resolved fields per collection together with
//! the imports the collection's generated file needs.

use crate::error::SchemaError;
use crate::imports::{CORE_IMPORT, Import, ImportSet, TYPES_IMPORT};
use crate::naming::{go_string_literal, to_exported_case, to_source_file_stem};
use crate::types::{CollectionDef, FieldDef, FieldKind, Schema};

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Collection models in provider order.
    pub models: Vec<CollectionModel>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    ///
    /// # Errors
    /// Returns the first `SchemaError` raised while building a collection; no
    /// partial representation is returned.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let models = schema
            .collections
            .iter()
            .map(CollectionModel::from_collection_def)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { models })
    }

    /// Gets a model by its raw collection name.
    #[must_use]
    pub fn get_model(&self, collection_name: &str) -> Option<&CollectionModel> {
        self.models
            .iter()
            .find(|m| m.collection_name == collection_name)
    }

    /// Returns true if there are no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Resolved model of one collection.
#[derive(Debug, Clone)]
pub struct CollectionModel {
    /// Exported type name.
    pub name: String,
    /// Raw collection name, the runtime lookup key.
    pub collection_name: String,
    /// File name stem of the generated file.
    pub file_stem: String,
    /// Resolved fields in schema order.
    pub fields: Vec<ResolvedField>,
    /// Imports required by the generated file.
    pub imports: ImportSet,
}

impl CollectionModel {
    /// Builds a model from a collection name and its fields.
    ///
    /// Fields are resolved in the given order, which is kept in the model.
    ///
    /// # Errors
    /// Returns the first resolution error, tagged with the collection name.
    pub fn build(collection_name: &str, fields: &[FieldDef]) -> Result<Self, SchemaError> {
        let mut imports = ImportSet::new();
        imports.add(CORE_IMPORT, None);

        let mut resolved = Vec::with_capacity(fields.len());
        for field in fields {
            let field = ResolvedField::resolve(field)
                .map_err(|e| e.in_collection(collection_name))?;
            imports.extend(field.dependencies.iter().cloned());
            resolved.push(field);
        }

        let model = Self {
            name: to_exported_case(collection_name),
            collection_name: collection_name.to_string(),
            file_stem: to_source_file_stem(collection_name),
            fields: resolved,
            imports,
        };

        tracing::debug!(
            "resolved collection '{}' as {} ({} fields)",
            model.collection_name,
            model.name,
            model.fields.len()
        );
        Ok(model)
    }

    /// Builds a model from a collection definition.
    ///
    /// # Errors
    /// See [`Self::build`].
    pub fn from_collection_def(collection: &CollectionDef) -> Result<Self, SchemaError> {
        Self::build(&collection.name, &collection.fields)
    }

    /// Returns the generated file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.go", self.file_stem)
    }

    /// Returns the constructor function name (`New<Model>`).
    #[must_use]
    pub fn constructor_name(&self) -> String {
        format!("New{}", self.name)
    }

    /// Returns the name of the constant holding the raw collection name.
    #[must_use]
    pub fn name_constant(&self) -> String {
        format!("{}CollectionName", self.name)
    }

    /// Returns the name of this collection's constant in the aggregate file.
    #[must_use]
    pub fn collection_constant(&self) -> String {
        format!("Collection{}", self.name)
    }

    /// Returns the name of the constant holding a field's raw name.
    #[must_use]
    pub fn field_constant(&self, field: &ResolvedField) -> String {
        format!("{}Field{}", self.name, field.exported_name)
    }

    /// Returns every package-level identifier generated for this collection,
    /// each paired with a description of what declares it.
    #[must_use]
    pub fn package_identifiers(&self) -> Vec<(String, String)> {
        let owner = |what: &str| format!("{} ({what})", self.collection_name);

        let mut idents = Vec::with_capacity(self.fields.len() + 4);
        idents.push((self.name.clone(), owner("type")));
        idents.push((self.constructor_name(), owner("constructor")));
        idents.push((self.name_constant(), owner("name constant")));
        for field in &self.fields {
            idents.push((
                self.field_constant(field),
                owner(&format!("field constant of {}", field.name)),
            ));
        }
        idents.push((self.collection_constant(), owner("collection constant")));
        idents
    }
}

/// Go types a field can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    /// `string`
    String,
    /// `[]string`
    StringSlice,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `types.DateTime`
    DateTime,
    /// `types.JSONRaw`
    JsonRaw,
}

impl GoType {
    /// Returns `[]string` for multi-valued fields, `string` otherwise.
    #[must_use]
    pub const fn strings(multiple: bool) -> Self {
        if multiple {
            Self::StringSlice
        } else {
            Self::String
        }
    }

    /// Returns the Go spelling of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringSlice => "[]string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::DateTime => "types.DateTime",
            Self::JsonRaw => "types.JSONRaw",
        }
    }

    /// Returns the record accessor that reads this type.
    #[must_use]
    pub const fn getter(&self) -> Getter {
        match self {
            Self::String => Getter::GetString,
            Self::StringSlice => Getter::GetStringSlice,
            Self::Int => Getter::GetInt,
            Self::Bool => Getter::GetBool,
            Self::DateTime => Getter::GetDateTime,
            Self::JsonRaw => Getter::Get,
        }
    }

    /// Returns the import the type needs, if any.
    #[must_use]
    pub const fn import_path(&self) -> Option<&'static str> {
        match self {
            Self::DateTime | Self::JsonRaw => Some(TYPES_IMPORT),
            Self::String | Self::StringSlice | Self::Int | Self::Bool => None,
        }
    }
}

/// Record accessors used by generated getters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Getter {
    /// `GetString`
    GetString,
    /// `GetStringSlice`
    GetStringSlice,
    /// `GetInt`
    GetInt,
    /// `GetBool`
    GetBool,
    /// `GetDateTime`
    GetDateTime,
    /// Untyped `Get`; the result must be cast.
    Get,
}

impl Getter {
    /// Returns the accessor method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetString => "GetString",
            Self::GetStringSlice => "GetStringSlice",
            Self::GetInt => "GetInt",
            Self::GetBool => "GetBool",
            Self::GetDateTime => "GetDateTime",
            Self::Get => "Get",
        }
    }

    /// Returns true if the accessor result needs a type assertion.
    #[must_use]
    pub const fn needs_cast(&self) -> bool {
        matches!(self, Self::Get)
    }
}

/// Resolved field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Raw field name.
    pub name: String,
    /// Kind tag of the source field.
    pub kind: String,
    /// Exported name.
    pub exported_name: String,
    /// Getter method name.
    pub getter_name: String,
    /// Setter method name.
    pub setter_name: String,
    /// Go type.
    pub go_type: GoType,
    /// Record accessor used by the getter.
    pub getter: Getter,
    /// Whether the accessor result is cast to `go_type`.
    pub needs_cast: bool,
    /// Getter doc comment lines.
    pub getter_doc: Vec<String>,
    /// Setter doc comment lines.
    pub setter_doc: Vec<String>,
    /// Imports required by `go_type`.
    pub dependencies: Vec<Import>,
}

impl ResolvedField {
    /// Resolves a field definition.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownFieldKind` for kinds outside the supported
    /// set; no default type is ever guessed.
    pub fn resolve(field: &FieldDef) -> Result<Self, SchemaError> {
        let (go_type, format, note) = match &field.kind {
            FieldKind::Text | FieldKind::Password => (GoType::String, None, None),
            FieldKind::Editor => (GoType::String, Some("HTML"), None),
            FieldKind::Url => (GoType::String, Some("URL"), None),
            FieldKind::Email => (GoType::String, Some("email"), None),
            FieldKind::File { multiple } => (GoType::strings(*multiple), Some("file"), None),
            FieldKind::Number => (GoType::Int, None, None),
            FieldKind::Bool => (GoType::Bool, None, None),
            FieldKind::Date | FieldKind::Autodate => (GoType::DateTime, None, None),
            FieldKind::Select { multiple, values } => {
                (GoType::strings(*multiple), None, possible_values_note(values))
            }
            FieldKind::Json => (GoType::JsonRaw, None, None),
            FieldKind::Relation {
                multiple,
                collection_id,
            } => (
                GoType::strings(*multiple),
                None,
                Some(format!(
                    "Related collection: {}",
                    go_string_literal(collection_id)
                )),
            ),
            FieldKind::Unknown(kind) => {
                return Err(SchemaError::UnknownFieldKind {
                    field: field.name.clone(),
                    kind: kind.clone(),
                });
            }
        };

        let exported_name = to_exported_case(&field.name);
        let getter_name = format!("Get{exported_name}");
        let setter_name = format!("Set{exported_name}");
        let quoted = go_string_literal(&field.name);
        let suffix = format.map(|f| format!(" as {f}")).unwrap_or_default();

        let mut getter_doc = vec![format!(
            "{getter_name} returns the value of the {quoted} field{suffix}"
        )];
        let mut setter_doc = vec![format!(
            "{setter_name} sets the value of the {quoted} field{suffix}"
        )];
        if let Some(note) = note {
            getter_doc.push(note.clone());
            setter_doc.push(note);
        }

        let getter = go_type.getter();
        Ok(Self {
            name: field.name.clone(),
            kind: field.kind.tag().to_string(),
            exported_name,
            getter_name,
            setter_name,
            go_type,
            getter,
            needs_cast: getter.needs_cast(),
            getter_doc,
            setter_doc,
            dependencies: go_type.import_path().map(Import::new).into_iter().collect(),
        })
    }
}

/// Builds the doc line listing a select field's values.
fn possible_values_note(values: &[String]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let list: Vec<String> = values.iter().map(|v| go_string_literal(v)).collect();
    Some(format!("Possible values: {}", list.join(", ")))
}
