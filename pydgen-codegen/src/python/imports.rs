//! Import header bookkeeping.

use crate::config::EnumStyle;

/// Run-scoped record of which optional imports the generated module needs.
///
/// Flags are only ever raised, never cleared. Each generation run owns a
/// fresh instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportState {
    any: bool,
    optional: bool,
    list: bool,
    union: bool,
    enumeration: bool,
    field: bool,
}

impl ImportState {
    /// Creates a state with nothing required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `typing.Any`.
    pub fn require_any(&mut self) {
        self.any = true;
    }

    /// Requires `typing.Optional`.
    pub fn require_optional(&mut self) {
        self.optional = true;
    }

    /// Requires `typing.List`.
    pub fn require_list(&mut self) {
        self.list = true;
    }

    /// Requires `typing.Union`.
    pub fn require_union(&mut self) {
        self.union = true;
    }

    /// Requires the enum base class.
    pub fn require_enum(&mut self) {
        self.enumeration = true;
    }

    /// Requires `pydantic.Field` for aliases.
    pub fn require_field(&mut self) {
        self.field = true;
    }

    /// Returns the `typing` names needed, in header order.
    #[must_use]
    pub fn typing_names(&self) -> Vec<&'static str> {
        [
            (self.any, "Any"),
            (self.optional, "Optional"),
            (self.list, "List"),
            (self.union, "Union"),
        ]
        .into_iter()
        .filter_map(|(needed, name)| needed.then_some(name))
        .collect()
    }

    /// Renders the import header: enum line, `typing` line, pydantic line.
    #[must_use]
    pub fn render(&self, enum_style: EnumStyle) -> String {
        let mut lines = Vec::with_capacity(3);

        if self.enumeration {
            lines.push(enum_style.import_line().to_string());
        }

        let typing = self.typing_names();
        if !typing.is_empty() {
            lines.push(format!("from typing import {}", typing.join(", ")));
        }

        if self.field {
            lines.push("from pydantic import BaseModel, Field".to_string());
        } else {
            lines.push("from pydantic import BaseModel".to_string());
        }

        lines.join("\n")
    }
}
