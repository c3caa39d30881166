//! Enum class generation.

use crate::config::EnumStyle;
use crate::declaration::Declaration;
use crate::python::imports::ImportState;
use crate::python::{INDENT, class_body};
use pydgen_schema::EnumDef;

/// Generator for enum classes.
///
/// Every value is emitted as a string member whose value equals its name,
/// matching how enum values travel over the wire.
pub struct EnumGenerator {
    style: EnumStyle,
}

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(style: EnumStyle) -> Self {
        Self { style }
    }

    /// Generates an enum class. Enums never depend on other declarations.
    pub fn generate(&self, def: &EnumDef, imports: &mut ImportState) -> Declaration {
        imports.require_enum();

        let lines = def
            .values
            .iter()
            .map(|value| format!("{INDENT}{0} = '{0}'", value.name));

        let rendered = format!(
            "class {}({}):\n{}",
            def.name,
            self.style.bases(),
            class_body(lines)
        );
        Declaration::new(def.name.as_str(), rendered)
    }
}
