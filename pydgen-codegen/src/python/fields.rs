//! Field line generation.

use crate::python::INDENT;
use crate::python::imports::ImportState;
use crate::python::reserved::{aliased_name, is_reserved};
use crate::python::types::TypeResolver;
use pydgen_schema::{FieldDef, InputValueDef, Type};

/// One rendered field line with the identity of its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    /// Base type of the field, used for dependency edges.
    pub identity: String,
    /// Indented field line without a trailing newline.
    pub line: String,
}

/// Generator for model field lines.
pub struct FieldGenerator<'a> {
    resolver: TypeResolver<'a>,
}

impl<'a> FieldGenerator<'a> {
    /// Creates a new field generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates the line for an object or interface field.
    pub fn generate_field(&self, field: &FieldDef, imports: &mut ImportState) -> RenderedField {
        self.generate(&field.name, &field.ty, imports)
    }

    /// Generates the line for an input object field.
    pub fn generate_input(
        &self,
        field: &InputValueDef,
        imports: &mut ImportState,
    ) -> RenderedField {
        self.generate(&field.name, &field.ty, imports)
    }

    /// Generates a field line, aliasing reserved names.
    pub fn generate(&self, name: &str, ty: &Type, imports: &mut ImportState) -> RenderedField {
        let resolved = self.resolver.resolve(ty, imports);

        let line = if is_reserved(name) {
            imports.require_field();
            format!(
                "{INDENT}{}: {} = Field(None, alias='{name}')",
                aliased_name(name),
                resolved.rendered
            )
        } else {
            format!("{INDENT}{name}: {}", resolved.rendered)
        };

        RenderedField {
            identity: resolved.identity,
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars::ScalarMap;

    fn render(name: &str, ty: &Type) -> (RenderedField, ImportState) {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let fields = FieldGenerator::new(TypeResolver::new(&scalars));
        let field = fields.generate(name, ty, &mut imports);
        (field, imports)
    }

    #[test]
    fn test_plain_field() {
        let (field, imports) = render("title", &Type::non_null(Type::named("String")));
        assert_eq!(field.line, "    title: str");
        assert_eq!(field.identity, "str");
        assert_eq!(
            imports.render(Default::default()),
            "from typing import Optional\nfrom pydantic import BaseModel"
        );
    }

    #[test]
    fn test_reserved_field_is_aliased() {
        let (field, imports) = render("copy", &Type::named("String"));
        assert_eq!(
            field.line,
            "    copy_: Optional[str] = Field(None, alias='copy')"
        );
        assert!(imports.render(Default::default()).ends_with("BaseModel, Field"));
    }

    #[test]
    fn test_keyword_field_is_aliased() {
        let (field, _) = render("from", &Type::non_null(Type::named("User")));
        assert_eq!(field.line, "    from_: 'User' = Field(None, alias='from')");
        assert_eq!(field.identity, "User");
    }

    #[test]
    fn test_regular_field_has_no_alias() {
        let (field, imports) = render("copies", &Type::named("Int"));
        assert_eq!(field.line, "    copies: Optional[int]");
        assert!(!imports.render(Default::default()).contains("Field"));
    }

    #[test]
    fn test_field_def_ignores_arguments() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let mut field = FieldDef::new("posts", Type::list(Type::named("Post")));
        field
            .arguments
            .push(InputValueDef::new("first", Type::named("Int")));

        let rendered = FieldGenerator::new(TypeResolver::new(&scalars))
            .generate_field(&field, &mut imports);
        assert_eq!(rendered.line, "    posts: Optional[List[Optional['Post']]]");
    }
}
