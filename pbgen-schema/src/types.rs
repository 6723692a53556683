//! Schema type definitions.
//!
//! This module contains the data structures describing a PocketBase schema as
//! read from a collections export: collections, their fields and field kinds.

/// Complete schema: every collection in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Collection definitions.
    pub collections: Vec<CollectionDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collections: Vec::new(),
        }
    }

    /// Adds a collection definition to the schema.
    pub fn add_collection(&mut self, collection: CollectionDef) {
        self.collections.push(collection);
    }

    /// Looks up a collection by name.
    #[must_use]
    pub fn get_collection(&self, name: &str) -> Option<&CollectionDef> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Looks up a collection by its identifier.
    #[must_use]
    pub fn get_collection_by_id(&self, id: &str) -> Option<&CollectionDef> {
        self.collections
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
    }

    /// Returns true if the schema has no collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Collection definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDef {
    /// Collection identifier assigned by PocketBase.
    pub id: Option<String>,
    /// Collection name, used as the runtime lookup key.
    pub name: String,
    /// Collection type.
    pub collection_type: CollectionType,
    /// Whether this is a system collection.
    pub system: bool,
    /// Fields in schema order.
    pub fields: Vec<FieldDef>,
}

impl CollectionDef {
    /// Creates a new base collection without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            collection_type: CollectionType::Base,
            system: false,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the collection.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Builder-style variant of [`Self::add_field`].
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// PocketBase collection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionType {
    /// Regular collection.
    #[default]
    Base,
    /// Auth collection.
    Auth,
    /// Read-only view collection.
    View,
}

impl CollectionType {
    /// Parses a collection type from its PocketBase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "auth" => Some(Self::Auth),
            "view" => Some(Self::View),
            _ => None,
        }
    }
}

/// Field definition within a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field kind with its kind-specific attributes.
    pub kind: FieldKind,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Field kinds with the attributes that are meaningful for each.
///
/// Kind tags outside the supported set are carried as [`FieldKind::Unknown`]
/// so resolution can reject them with the offending collection and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text.
    Text,
    /// Rich text (HTML).
    Editor,
    /// URL.
    Url,
    /// Email address.
    Email,
    /// Password hash.
    Password,
    /// Number.
    Number,
    /// Boolean.
    Bool,
    /// Date.
    Date,
    /// Date maintained by PocketBase on create/update.
    Autodate,
    /// File name(s).
    File {
        /// Whether more than one file can be stored.
        multiple: bool,
    },
    /// One or more values from a fixed list.
    Select {
        /// Whether more than one value can be selected.
        multiple: bool,
        /// Allowed values in schema order.
        values: Vec<String>,
    },
    /// Arbitrary JSON.
    Json,
    /// Record id(s) in another collection.
    Relation {
        /// Whether more than one record can be referenced.
        multiple: bool,
        /// Identifier of the related collection.
        collection_id: String,
    },
    /// Unsupported kind tag.
    Unknown(String),
}

impl FieldKind {
    /// Returns the PocketBase kind tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Editor => "editor",
            Self::Url => "url",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Autodate => "autodate",
            Self::File { .. } => "file",
            Self::Select { .. } => "select",
            Self::Json => "json",
            Self::Relation { .. } => "relation",
            Self::Unknown(tag) => tag,
        }
    }

    /// Returns the multiplicity for kinds that have one.
    #[must_use]
    pub const fn is_multiple(&self) -> Option<bool> {
        match self {
            Self::File { multiple }
            | Self::Select { multiple, .. }
            | Self::Relation { multiple, .. } => Some(*multiple),
            _ => None,
        }
    }
}
