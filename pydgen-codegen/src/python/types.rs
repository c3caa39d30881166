//! Type expression rendering.
//!
//! GraphQL types are nullable unless marked `!`, so every layer starts out
//! wrapped in `Optional[...]` and a non-null marker peels exactly one such
//! layer off again. Declared types are rendered as quoted forward
//! references, which lets fields point at classes emitted later in the
//! module.

use crate::python::imports::ImportState;
use crate::scalars::{ANY_TYPE, ScalarMap, ScalarTarget};
use pydgen_schema::Type;

const OPTIONAL_PREFIX: &str = "Optional[";

/// A rendered type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Base type the expression points at, unchanged by wrapping.
    pub identity: String,
    /// Python type expression.
    pub rendered: String,
}

impl TypeRef {
    /// Creates a type reference.
    #[must_use]
    pub fn new(identity: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            rendered: rendered.into(),
        }
    }
}

/// Renders GraphQL type expressions against a scalar table.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    scalars: &'a ScalarMap,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub fn new(scalars: &'a ScalarMap) -> Self {
        Self { scalars }
    }

    /// Renders a type expression, innermost named type first.
    pub fn resolve(&self, ty: &Type, imports: &mut ImportState) -> TypeRef {
        match ty {
            Type::Named(name) => self.named(name, imports),
            Type::List(inner) => {
                let inner = self.resolve(inner, imports);
                list(inner, imports)
            }
            Type::NonNull(inner) => non_null(self.resolve(inner, imports)),
        }
    }

    /// Renders a bare named type.
    pub fn named(&self, name: &str, imports: &mut ImportState) -> TypeRef {
        match self.scalars.resolve(name) {
            Some(ScalarTarget::Any) => {
                imports.require_any();
                TypeRef::new(ANY_TYPE, ANY_TYPE)
            }
            Some(ScalarTarget::Named(primitive)) => {
                imports.require_optional();
                TypeRef::new(primitive.as_str(), format!("Optional[{primitive}]"))
            }
            None => {
                imports.require_optional();
                TypeRef::new(name, format!("Optional['{name}']"))
            }
        }
    }

    /// Returns true if the identity is a primitive rather than a declaration.
    #[must_use]
    pub fn is_primitive(&self, identity: &str) -> bool {
        self.scalars.is_primitive_identity(identity)
    }
}

/// Wraps a type in an optional list.
pub fn list(inner: TypeRef, imports: &mut ImportState) -> TypeRef {
    imports.require_list();
    imports.require_optional();
    TypeRef {
        rendered: format!("Optional[List[{}]]", inner.rendered),
        identity: inner.identity,
    }
}

/// Marks a type non-null by removing one `Optional[...]` layer.
#[must_use]
pub fn non_null(inner: TypeRef) -> TypeRef {
    TypeRef {
        rendered: strip_optional(&inner.rendered).to_string(),
        identity: inner.identity,
    }
}

/// Removes one outer `Optional[...]` layer, if present.
#[must_use]
pub fn strip_optional(rendered: &str) -> &str {
    rendered
        .strip_prefix(OPTIONAL_PREFIX)
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(rendered)
}

/// Removes forward-reference quotes: `'Node'` becomes `Node`.
#[must_use]
pub fn unquote(rendered: &str) -> String {
    rendered.replace('\'', "")
}
