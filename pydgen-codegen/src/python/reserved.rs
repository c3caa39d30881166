//! Reserved identifiers.
//!
//! A field whose name is a Python keyword, or shadows a pydantic
//! `BaseModel` member, is emitted with [`ALIAS_SUFFIX`] appended and a
//! `Field(None, alias='...')` default that maps it back to the wire name.

/// Python hard keywords.
pub const PYTHON_RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// `BaseModel` members that break model construction when shadowed.
pub const PYDANTIC_RESERVED: &[&str] = &["copy"];

/// Suffix appended to reserved field names.
pub const ALIAS_SUFFIX: &str = "_";

/// Returns true if `name` must be aliased. Exact, case-sensitive match.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    PYTHON_RESERVED.contains(&name) || PYDANTIC_RESERVED.contains(&name)
}

/// Returns the Python attribute name for a reserved field.
#[must_use]
pub fn aliased_name(name: &str) -> String {
    format!("{name}{ALIAS_SUFFIX}")
}
