//! Model class generation for object, interface and input types.

use crate::declaration::Declaration;
use crate::python::class_body;
use crate::python::fields::FieldGenerator;
use crate::python::imports::ImportState;
use crate::python::types::{TypeResolver, strip_optional, unquote};
use pydgen_schema::{InputObjectDef, InterfaceDef, ObjectDef};

/// Base class of models that implement no interface.
pub const BASE_MODEL: &str = "BaseModel";

/// Generator for pydantic model classes.
pub struct ModelGenerator<'a> {
    resolver: TypeResolver<'a>,
    fields: FieldGenerator<'a>,
}

impl<'a> ModelGenerator<'a> {
    /// Creates a new model generator.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>) -> Self {
        Self {
            resolver,
            fields: FieldGenerator::new(resolver),
        }
    }

    /// Generates an object type class.
    ///
    /// Implemented interfaces become base classes and dependencies. Field
    /// types never add dependencies: they are quoted forward references and
    /// resolve regardless of emission order.
    pub fn generate_object(&self, def: &ObjectDef, imports: &mut ImportState) -> Declaration {
        let bases: Vec<String> = def
            .interfaces
            .iter()
            .map(|interface| self.base_name(interface, imports))
            .collect();

        let lines: Vec<String> = def
            .fields
            .iter()
            .map(|field| self.fields.generate_field(field, imports).line)
            .collect();

        let rendered = if bases.is_empty() {
            render_class(&def.name, BASE_MODEL, lines)
        } else {
            render_class(&def.name, &bases.join(", "), lines)
        };

        let mut decl = Declaration::new(def.name.as_str(), rendered);
        for base in bases {
            if !self.resolver.is_primitive(&base) {
                decl.extends(base);
            }
        }
        decl
    }

    /// Generates an interface class with one dependency per declared field
    /// type.
    pub fn generate_interface(&self, def: &InterfaceDef, imports: &mut ImportState) -> Declaration {
        let mut lines = Vec::with_capacity(def.fields.len());
        let mut dependencies = Vec::new();

        for field in &def.fields {
            let rendered = self.fields.generate_field(field, imports);
            if !self.resolver.is_primitive(&rendered.identity) {
                dependencies.push(rendered.identity);
            }
            lines.push(rendered.line);
        }

        let rendered = render_class(&def.name, BASE_MODEL, lines);
        let mut decl = Declaration::new(def.name.as_str(), rendered);
        for dependency in dependencies {
            decl.depends_on(dependency);
        }
        decl
    }

    /// Generates an input object class. Inputs never depend on other
    /// declarations.
    pub fn generate_input(&self, def: &InputObjectDef, imports: &mut ImportState) -> Declaration {
        let lines: Vec<String> = def
            .fields
            .iter()
            .map(|field| self.fields.generate_input(field, imports).line)
            .collect();

        Declaration::new(def.name.as_str(), render_class(&def.name, BASE_MODEL, lines))
    }

    /// Renders an implemented interface as a bare base class name.
    fn base_name(&self, interface: &str, imports: &mut ImportState) -> String {
        let resolved = self.resolver.named(interface, imports);
        unquote(strip_optional(&resolved.rendered))
    }
}

fn render_class(name: &str, bases: &str, lines: Vec<String>) -> String {
    format!("class {name}({bases}):\n{}", class_body(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars::ScalarMap;
    use pydgen_schema::{FieldDef, InputValueDef, Type};

    fn models(scalars: &ScalarMap) -> ModelGenerator<'_> {
        ModelGenerator::new(TypeResolver::new(scalars))
    }

    #[test]
    fn test_plain_object() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = ObjectDef::new("A", vec![FieldDef::new("id", Type::named("ID"))]);

        let decl = models(&scalars).generate_object(&def, &mut imports);
        assert_eq!(decl.rendered, "class A(BaseModel):\n    id: Optional[str]");
        assert!(decl.dependencies.is_empty());
    }

    #[test]
    fn test_object_fields_add_no_dependencies() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = ObjectDef::new(
            "Post",
            vec![
                FieldDef::new("author", Type::non_null(Type::named("User"))),
                FieldDef::new("comments", Type::list(Type::named("Comment"))),
            ],
        );

        let decl = models(&scalars).generate_object(&def, &mut imports);
        assert_eq!(
            decl.rendered,
            "class Post(BaseModel):\n    author: 'User'\n    \
             comments: Optional[List[Optional['Comment']]]"
        );
        assert!(decl.dependencies.is_empty());
    }

    #[test]
    fn test_object_implementing_interfaces() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = ObjectDef::new(
            "Post",
            vec![FieldDef::new("id", Type::non_null(Type::named("ID")))],
        )
        .implements(["Node", "Timestamped"]);

        let decl = models(&scalars).generate_object(&def, &mut imports);
        assert_eq!(decl.rendered, "class Post(Node, Timestamped):\n    id: str");
        assert_eq!(decl.dependencies, vec!["Node", "Timestamped"]);
        assert_eq!(decl.supertypes, vec!["Node", "Timestamped"]);
    }

    #[test]
    fn test_interface_depends_on_declared_field_types() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = InterfaceDef::new(
            "Owned",
            vec![
                FieldDef::new("id", Type::non_null(Type::named("ID"))),
                FieldDef::new("owner", Type::named("User")),
                FieldDef::new("editors", Type::list(Type::named("User"))),
            ],
        );

        let decl = models(&scalars).generate_interface(&def, &mut imports);
        assert_eq!(
            decl.rendered,
            "class Owned(BaseModel):\n    id: str\n    owner: Optional['User']\n    \
             editors: Optional[List[Optional['User']]]"
        );
        assert_eq!(decl.dependencies, vec!["User"]);
        assert!(decl.supertypes.is_empty());
    }

    #[test]
    fn test_input_object() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = InputObjectDef::new(
            "PostFilter",
            vec![
                InputValueDef::new("author", Type::named("UserFilter")),
                InputValueDef::new("from", Type::named("Int")),
            ],
        );

        let decl = models(&scalars).generate_input(&def, &mut imports);
        assert_eq!(
            decl.rendered,
            "class PostFilter(BaseModel):\n    author: Optional['UserFilter']\n    \
             from_: Optional[int] = Field(None, alias='from')"
        );
        assert!(decl.dependencies.is_empty());
        assert!(imports.render(Default::default()).ends_with("BaseModel, Field"));
    }

    #[test]
    fn test_empty_model_has_pass_body() {
        let scalars = ScalarMap::default();
        let mut imports = ImportState::new();
        let def = ObjectDef::new("Marker", Vec::new());

        let decl = models(&scalars).generate_object(&def, &mut imports);
        assert_eq!(decl.rendered, "class Marker(BaseModel):\n    pass");
    }
}
