//! Import (dependency) set for generated files.
//!
//! Resolved field types may require packages in the generated file. The set
//! is keyed by import path, so registering the same path again is a no-op,
//! and its snapshot is always sorted by path.

use std::collections::BTreeMap;
use std::fmt;

/// Import path of the PocketBase record types.
pub const CORE_IMPORT: &str = "github.com/pocketbase/pocketbase/core";

/// Import path of `types.DateTime` and `types.JSONRaw`.
pub const TYPES_IMPORT: &str = "github.com/pocketbase/pocketbase/tools/types";

/// A single import declaration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Import {
    /// Import path.
    pub path: String,
    /// Optional alias.
    pub alias: Option<String>,
}

impl Import {
    /// Creates an import without alias.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    /// Creates an aliased import.
    #[must_use]
    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

impl fmt::Display for Import {
    /// Formats the import as it appears inside an import block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{alias} \"{}\"", self.path),
            None => write!(f, "\"{}\"", self.path),
        }
    }
}

/// Set of imports, unique by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: BTreeMap<String, Option<String>>,
}

impl ImportSet {
    /// Creates an empty import set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            imports: BTreeMap::new(),
        }
    }

    /// Registers an import path.
    ///
    /// The first registration of a path wins; later ones are ignored whatever
    /// their alias.
    pub fn add(&mut self, path: impl Into<String>, alias: Option<String>) {
        self.imports.entry(path.into()).or_insert(alias);
    }

    /// Registers an [`Import`].
    pub fn insert(&mut self, import: Import) {
        self.add(import.path, import.alias);
    }

    /// Returns true if the path is registered.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Returns the number of registered imports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Returns true if no import is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Returns the imports sorted by path.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Import> {
        self.imports
            .iter()
            .map(|(path, alias)| Import {
                path: path.clone(),
                alias: alias.clone(),
            })
            .collect()
    }
}

impl Extend<Import> for ImportSet {
    fn extend<I: IntoIterator<Item = Import>>(&mut self, iter: I) {
        for import in iter {
            self.insert(import);
        }
    }
}
