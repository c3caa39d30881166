//! Python and pydantic code generation.

pub mod enums;
pub mod fields;
pub mod imports;
pub mod models;
pub mod reserved;
pub mod types;
pub mod unions;

pub use enums::EnumGenerator;
pub use fields::{FieldGenerator, RenderedField};
pub use imports::ImportState;
pub use models::ModelGenerator;
pub use types::{TypeRef, TypeResolver};
pub use unions::UnionGenerator;

/// Indentation of class body lines.
pub const INDENT: &str = "    ";

/// Joins body lines, substituting `pass` for an empty body so the class
/// stays valid Python.
pub(crate) fn class_body<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let body = lines.into_iter().collect::<Vec<_>>().join("\n");
    if body.is_empty() {
        format!("{INDENT}pass")
    } else {
        body
    }
}
