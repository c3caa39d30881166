//! Main code generator.

use crate::assembler::DocumentAssembler;
use crate::config::CodegenConfig;
use crate::python::{EnumGenerator, ImportState, ModelGenerator, TypeResolver, UnionGenerator};
use crate::scalars::ScalarMap;
use pydgen_schema::{Definition, Document};
use std::borrow::Cow;
use tracing::debug;

/// Translates a parsed schema document into one Python module.
///
/// A generator only holds configuration. Each [`generate`](Self::generate)
/// call builds its own scalar table, import state and dependency graph, so
/// one instance can be shared across threads and reused across documents.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: CodegenConfig,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Generates the Python module for a document.
    ///
    /// `extend` definitions are merged into their base definitions first;
    /// extensions of types the document never defines are dropped.
    #[must_use]
    pub fn generate(&self, document: &Document) -> String {
        let document = if document.has_extensions() {
            let mut merged = document.clone();
            merged.merge_extensions();
            Cow::Owned(merged)
        } else {
            Cow::Borrowed(document)
        };

        let scalars = ScalarMap::for_document(&document, &self.config.scalars);
        let resolver = TypeResolver::new(&scalars);
        let models = ModelGenerator::new(resolver);
        let unions = UnionGenerator::new(resolver);
        let enums = EnumGenerator::new(self.config.enum_style);

        let mut imports = ImportState::new();
        let mut assembler = DocumentAssembler::new();

        for definition in &document.definitions {
            let declaration = match definition {
                Definition::Object(def) => models.generate_object(def, &mut imports),
                Definition::Interface(def) => models.generate_interface(def, &mut imports),
                Definition::InputObject(def) => models.generate_input(def, &mut imports),
                Definition::Enum(def) => enums.generate(def, &mut imports),
                Definition::Union(def) => unions.generate(def, &mut imports),
                Definition::Schema(_)
                | Definition::Scalar(_)
                | Definition::Directive(_)
                | Definition::Extension(_) => {
                    debug!(
                        kind = definition.keyword(),
                        name = definition.name().unwrap_or_default(),
                        extension = definition.is_extension(),
                        "definition produces no declaration"
                    );
                    continue;
                }
            };
            assembler.add(declaration);
        }

        debug!(declarations = assembler.len(), "assembling module");
        assembler.finish(&imports.render(self.config.enum_style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnumStyle;
    use crate::scalars::ScalarTarget;
    use pretty_assertions::assert_eq;
    use pydgen_schema::parse_document;

    fn generate(sdl: &str, config: CodegenConfig) -> String {
        let document = parse_document(sdl).expect("Failed to parse");
        Generator::new(config).generate(&document)
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            generate("", CodegenConfig::new()),
            "from pydantic import BaseModel\n\n\n\n"
        );
    }

    #[test]
    fn test_ignored_definitions() {
        let output = generate(
            "schema { query: Query }\n\
             scalar Date\n\
             directive @auth on FIELD_DEFINITION\n\
             type Query { ping: String }",
            CodegenConfig::new(),
        );
        assert_eq!(
            output,
            "from typing import Optional\n\
             from pydantic import BaseModel\n\n\n\
             class Query(BaseModel):\n    ping: Optional[str]\n"
        );
    }

    #[test]
    fn test_extensions_are_merged() {
        let output = generate(
            "type A { id: ID }\nextend type A { name: String }\nextend type Ghost { id: ID }",
            CodegenConfig::new(),
        );
        assert_eq!(
            output,
            "from typing import Optional\n\
             from pydantic import BaseModel\n\n\n\
             class A(BaseModel):\n    id: Optional[str]\n    name: Optional[str]\n"
        );
    }

    #[test]
    fn test_enum_style_flows_through() {
        let output = generate(
            "enum Color { RED }",
            CodegenConfig::new().enum_style(EnumStyle::StrMixin),
        );
        assert_eq!(
            output,
            "from enum import Enum\n\
             from pydantic import BaseModel\n\n\n\
             class Color(str, Enum):\n    RED = 'RED'\n"
        );
    }

    #[test]
    fn test_scalar_override() {
        let output = generate(
            "scalar DateTime\ntype Event { at: DateTime! }",
            CodegenConfig::new().scalar("DateTime", ScalarTarget::named("datetime")),
        );
        assert!(output.contains("    at: datetime\n"));
    }

    #[test]
    fn test_runs_are_independent() {
        let generator = Generator::new(CodegenConfig::new());
        let with_field = parse_document("type A { copy: String }").expect("Failed to parse");
        let plain = parse_document("type B { id: Int }").expect("Failed to parse");

        assert!(generator.generate(&with_field).contains("BaseModel, Field"));
        assert!(!generator.generate(&plain).contains("Field"));
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
    }
}
