//! Error types for schema reading and resolution.

use thiserror::Error;

/// Error type for reading collections from an export or a database.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Element the attribute belongs to (collection and field).
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// SQLite database error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for resolving collections into models.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Field kind outside the supported set.
    #[error("unknown field kind '{kind}' for field '{field}'")]
    UnknownFieldKind {
        /// Field name.
        field: String,
        /// Kind tag as found in the schema.
        kind: String,
    },

    /// Two schema names normalize to the same generated identifier.
    #[error("duplicate {kind} identifier '{name}' derived from '{first}' and '{second}'")]
    DuplicateIdentifier {
        /// Kind of identifier (type, file, field).
        kind: String,
        /// The colliding generated identifier.
        name: String,
        /// First schema name producing it.
        first: String,
        /// Second schema name producing it.
        second: String,
    },

    /// Error raised while building a specific collection.
    #[error("collection '{collection}': {source}")]
    Collection {
        /// Collection name.
        collection: String,
        /// Underlying error.
        #[source]
        source: Box<SchemaError>,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate identifier error.
    pub fn duplicate(
        kind: impl Into<String>,
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateIdentifier {
            kind: kind.into(),
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Attaches the collection the error was raised in.
    pub fn in_collection(self, collection: impl Into<String>) -> Self {
        Self::Collection {
            collection: collection.into(),
            source: Box::new(self),
        }
    }
}
