//! Union alias generation.

use crate::declaration::Declaration;
use crate::python::imports::ImportState;
use crate::python::types::{TypeResolver, strip_optional};
use pydgen_schema::UnionDef;

/// Generator for `Name = Union[...]` aliases.
pub struct UnionGenerator<'a> {
    resolver: TypeResolver<'a>,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates a union alias with one dependency per declared member.
    pub fn generate(&self, def: &UnionDef, imports: &mut ImportState) -> Declaration {
        imports.require_union();

        let mut members = Vec::with_capacity(def.members.len());
        let mut dependencies = Vec::new();

        for member in &def.members {
            let resolved = self.resolver.named(member, imports);
            members.push(strip_optional(&resolved.rendered).to_string());
            if !self.resolver.is_primitive(&resolved.identity) {
                dependencies.push(resolved.identity);
            }
        }

        let rendered = format!("{} = Union[{}]", def.name, members.join(", "));
        let mut decl = Declaration::new(def.name.as_str(), rendered);
        for dependency in dependencies {
            decl.depends_on(dependency);
        }
        decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars::{ScalarMap, ScalarOverrides, ScalarTarget};

    #[test]
    fn test_union_of_declared_types() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = UnionDef::new("SearchResult", ["Post", "User"]);

        let decl = UnionGenerator::new(TypeResolver::new(&scalars)).generate(&def, &mut imports);
        assert_eq!(decl.rendered, "SearchResult = Union['Post', 'User']");
        assert_eq!(decl.dependencies, vec!["Post", "User"]);
        assert_eq!(imports.typing_names(), vec!["Optional", "Union"]);
    }

    #[test]
    fn test_primitive_members_have_no_edges() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = UnionDef::new("Scalarish", ["String", "Int", "Post"]);

        let decl = UnionGenerator::new(TypeResolver::new(&scalars)).generate(&def, &mut imports);
        assert_eq!(decl.rendered, "Scalarish = Union[str, int, 'Post']");
        assert_eq!(decl.dependencies, vec!["Post"]);
    }

    #[test]
    fn test_any_member() {
        let mut overrides = ScalarOverrides::new();
        overrides.insert("JSON".to_string(), ScalarTarget::Any);
        let scalars = ScalarMap::new(&overrides);
        let mut imports = ImportState::new();
        let def = UnionDef::new("Payload", ["JSON", "Post"]);

        let decl = UnionGenerator::new(TypeResolver::new(&scalars)).generate(&def, &mut imports);
        assert_eq!(decl.rendered, "Payload = Union[Any, 'Post']");
        assert_eq!(decl.dependencies, vec!["Post"]);
    }
}
