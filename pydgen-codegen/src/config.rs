//! Generator configuration.

use crate::error::CodegenError;
use crate::scalars::{ScalarOverrides, ScalarTarget};
use std::str::FromStr;

/// How enum classes are declared in the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumStyle {
    /// `class Color(StrEnum)`, requires Python 3.11.
    #[default]
    StrEnum,
    /// `class Color(str, Enum)`, works on older interpreters.
    StrMixin,
}

impl EnumStyle {
    /// Returns the base class list of generated enum classes.
    #[must_use]
    pub const fn bases(self) -> &'static str {
        match self {
            Self::StrEnum => "StrEnum",
            Self::StrMixin => "str, Enum",
        }
    }

    /// Returns the import line enum classes need.
    #[must_use]
    pub const fn import_line(self) -> &'static str {
        match self {
            Self::StrEnum => "from enum import StrEnum",
            Self::StrMixin => "from enum import Enum",
        }
    }
}

impl FromStr for EnumStyle {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "str-enum" | "StrEnum" => Ok(Self::StrEnum),
            "str-mixin" | "str, Enum" => Ok(Self::StrMixin),
            _ => Err(CodegenError::UnknownEnumStyle {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default)]
pub struct CodegenConfig {
    /// Scalar mappings that take precedence over the built-in table.
    pub scalars: ScalarOverrides,
    /// Enum declaration style.
    pub enum_style: EnumStyle,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a GraphQL scalar to a Python type.
    #[must_use]
    pub fn scalar(mut self, name: impl Into<String>, target: ScalarTarget) -> Self {
        self.scalars.insert(name.into(), target);
        self
    }

    /// Adds several scalar mappings.
    #[must_use]
    pub fn scalars<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, ScalarTarget)>,
    {
        self.scalars.extend(overrides);
        self
    }

    /// Sets the enum declaration style.
    #[must_use]
    pub fn enum_style(mut self, style: EnumStyle) -> Self {
        self.enum_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CodegenConfig::new()
            .scalar("DateTime", ScalarTarget::named("datetime"))
            .scalars(vec![("JSON".to_string(), ScalarTarget::Any)])
            .enum_style(EnumStyle::StrMixin);

        assert_eq!(config.scalars.len(), 2);
        assert_eq!(config.scalars["JSON"], ScalarTarget::Any);
        assert_eq!(config.enum_style, EnumStyle::StrMixin);
    }

    #[test]
    fn test_later_scalar_wins() {
        let config = CodegenConfig::new()
            .scalar("ID", ScalarTarget::named("int"))
            .scalar("ID", ScalarTarget::named("UUID"));
        assert_eq!(config.scalars["ID"], ScalarTarget::named("UUID"));
    }

    #[test]
    fn test_enum_style_default() {
        let style = EnumStyle::default();
        assert_eq!(style.bases(), "StrEnum");
        assert_eq!(style.import_line(), "from enum import StrEnum");
    }

    #[test]
    fn test_enum_style_from_str() {
        assert_eq!("str-enum".parse::<EnumStyle>().unwrap(), EnumStyle::StrEnum);
        assert_eq!("str-mixin".parse::<EnumStyle>().unwrap(), EnumStyle::StrMixin);
        assert!("int-enum".parse::<EnumStyle>().is_err());
        assert_eq!(EnumStyle::StrMixin.bases(), "str, Enum");
        assert_eq!(EnumStyle::StrMixin.import_line(), "from enum import Enum");
    }
}
