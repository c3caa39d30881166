//! GraphQL scalar to Python type mapping.

use crate::error::CodegenError;
use indexmap::IndexMap;
use pydgen_schema::Document;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Built-in GraphQL scalars and their Python primitives.
pub const PYTHON_SCALARS: &[(&str, &str)] = &[
    ("ID", "str"),
    ("String", "str"),
    ("Boolean", "bool"),
    ("Int", "int"),
    ("Float", "float"),
];

/// Rendered name of the dynamic type.
pub const ANY_TYPE: &str = "Any";

/// Caller-supplied scalar mappings, applied on top of the built-in table.
pub type ScalarOverrides = IndexMap<String, ScalarTarget>;

/// Python type a GraphQL scalar maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarTarget {
    /// A named Python type such as `str` or `datetime`.
    Named(String),
    /// `typing.Any`; never wrapped in `Optional`.
    Any,
}

impl ScalarTarget {
    /// Creates a named target.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the identity used for dependency tracking.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Any => ANY_TYPE,
        }
    }
}

impl fmt::Display for ScalarTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}

impl FromStr for ScalarTarget {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(CodegenError::invalid_scalar(s, "empty target type")),
            "any" | ANY_TYPE => Ok(Self::Any),
            name => Ok(Self::named(name)),
        }
    }
}

/// Parses a `NAME=TARGET` override pair.
///
/// # Errors
/// Returns `CodegenError::InvalidScalar` if the pair has no `=` or either
/// side is empty.
pub fn parse_override(entry: &str) -> Result<(String, ScalarTarget), CodegenError> {
    let (name, target) = entry
        .split_once('=')
        .ok_or_else(|| CodegenError::invalid_scalar(entry, "expected NAME=TARGET"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CodegenError::invalid_scalar(entry, "empty scalar name"));
    }

    let target = target
        .parse()
        .map_err(|_| CodegenError::invalid_scalar(entry, "empty target type"))?;
    Ok((name.to_string(), target))
}

/// Resolved scalar table for one document.
#[derive(Debug, Clone)]
pub struct ScalarMap {
    entries: IndexMap<String, ScalarTarget>,
    primitive_identities: HashSet<String>,
}

impl ScalarMap {
    /// Creates a map from the built-in table plus overrides.
    #[must_use]
    pub fn new(overrides: &ScalarOverrides) -> Self {
        let mut entries: IndexMap<String, ScalarTarget> = PYTHON_SCALARS
            .iter()
            .map(|(name, target)| ((*name).to_string(), ScalarTarget::named(*target)))
            .collect();

        for (name, target) in overrides {
            entries.insert(name.clone(), target.clone());
        }

        Self::from_entries(entries)
    }

    /// Creates a map for a document: built-ins, then every custom scalar the
    /// document declares (as `Any`), then overrides.
    ///
    /// Overrides naming scalars the document never declares are kept; they
    /// simply never match.
    #[must_use]
    pub fn for_document(document: &Document, overrides: &ScalarOverrides) -> Self {
        let mut entries: IndexMap<String, ScalarTarget> = PYTHON_SCALARS
            .iter()
            .map(|(name, target)| ((*name).to_string(), ScalarTarget::named(*target)))
            .collect();

        for scalar in document.scalars() {
            entries
                .entry(scalar.name.clone())
                .or_insert(ScalarTarget::Any);
        }

        for (name, target) in overrides {
            entries.insert(name.clone(), target.clone());
        }

        Self::from_entries(entries)
    }

    fn from_entries(entries: IndexMap<String, ScalarTarget>) -> Self {
        let primitive_identities = entries
            .values()
            .map(|target| target.identity().to_string())
            .chain(std::iter::once(ANY_TYPE.to_string()))
            .collect();

        Self {
            entries,
            primitive_identities,
        }
    }

    /// Looks up a scalar; `None` means the name is a user-declared type.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ScalarTarget> {
        self.entries.get(name)
    }

    /// Returns true if the identity belongs to a primitive rather than a
    /// declaration, so it must not become a graph edge.
    #[must_use]
    pub fn is_primitive_identity(&self, identity: &str) -> bool {
        self.primitive_identities.contains(identity)
    }

    /// Returns the number of known scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no scalars are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScalarMap {
    fn default() -> Self {
        Self::new(&ScalarOverrides::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pydgen_schema::parse_document;

    #[test]
    fn test_builtin_scalars() {
        let map = ScalarMap::default();
        assert_eq!(map.resolve("ID"), Some(&ScalarTarget::named("str")));
        assert_eq!(map.resolve("String"), Some(&ScalarTarget::named("str")));
        assert_eq!(map.resolve("Boolean"), Some(&ScalarTarget::named("bool")));
        assert_eq!(map.resolve("Int"), Some(&ScalarTarget::named("int")));
        assert_eq!(map.resolve("Float"), Some(&ScalarTarget::named("float")));
        assert_eq!(map.resolve("Post"), None);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = ScalarOverrides::new();
        overrides.insert("ID".to_string(), ScalarTarget::named("UUID"));
        overrides.insert("DateTime".to_string(), ScalarTarget::named("datetime"));

        let map = ScalarMap::new(&overrides);
        assert_eq!(map.resolve("ID"), Some(&ScalarTarget::named("UUID")));
        assert_eq!(map.resolve("DateTime"), Some(&ScalarTarget::named("datetime")));
        assert!(map.is_primitive_identity("UUID"));
    }

    #[test]
    fn test_document_scalars_default_to_any() {
        let doc = parse_document("scalar JSON\nscalar Date").expect("Failed to parse");
        let mut overrides = ScalarOverrides::new();
        overrides.insert("Date".to_string(), ScalarTarget::named("date"));

        let map = ScalarMap::for_document(&doc, &overrides);
        assert_eq!(map.resolve("JSON"), Some(&ScalarTarget::Any));
        assert_eq!(map.resolve("Date"), Some(&ScalarTarget::named("date")));
    }

    #[test]
    fn test_redeclared_builtin_keeps_mapping() {
        let doc = parse_document("scalar String").expect("Failed to parse");
        let map = ScalarMap::for_document(&doc, &ScalarOverrides::new());
        assert_eq!(map.resolve("String"), Some(&ScalarTarget::named("str")));
    }

    #[test]
    fn test_unknown_override_is_accepted() {
        let mut overrides = ScalarOverrides::new();
        overrides.insert("NeverDeclared".to_string(), ScalarTarget::named("bytes"));

        let doc = parse_document("type A { id: ID }").expect("Failed to parse");
        let map = ScalarMap::for_document(&doc, &overrides);
        assert_eq!(map.resolve("NeverDeclared"), Some(&ScalarTarget::named("bytes")));
    }

    #[test]
    fn test_primitive_identities() {
        let map = ScalarMap::default();
        assert!(map.is_primitive_identity("str"));
        assert!(map.is_primitive_identity("float"));
        assert!(map.is_primitive_identity("Any"));
        assert!(!map.is_primitive_identity("Post"));
        assert!(!map.is_primitive_identity("String"));
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("any".parse::<ScalarTarget>().unwrap(), ScalarTarget::Any);
        assert_eq!("Any".parse::<ScalarTarget>().unwrap(), ScalarTarget::Any);
        assert_eq!(
            " datetime ".parse::<ScalarTarget>().unwrap(),
            ScalarTarget::named("datetime")
        );
        assert!("".parse::<ScalarTarget>().is_err());
    }

    #[test]
    fn test_parse_override() {
        let (name, target) = parse_override("DateTime=datetime").expect("valid override");
        assert_eq!(name, "DateTime");
        assert_eq!(target, ScalarTarget::named("datetime"));

        let (name, target) = parse_override("JSON=any").expect("valid override");
        assert_eq!(name, "JSON");
        assert_eq!(target, ScalarTarget::Any);

        assert!(parse_override("DateTime").is_err());
        assert!(parse_override("=str").is_err());
        assert!(parse_override("DateTime=").is_err());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(ScalarTarget::named("int").to_string(), "int");
        assert_eq!(ScalarTarget::Any.to_string(), "Any");
    }
}
