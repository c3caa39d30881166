//! # pydgen Schema
//!
//! GraphQL SDL parser and typed schema AST.
//!
//! This crate provides:
//! - A tokenizer for GraphQL type-system documents
//! - A recursive-descent parser producing a typed [`Document`]
//! - Merging of `extend` definitions into the definitions they extend
//! - Node types for every type-system definition the code generator consumes

pub mod error;
pub mod lexer;
mod merge;
pub mod parser;
pub mod types;

pub use error::{ParseError, Position};
pub use parser::parse_document;
pub use types::{
    Definition, Directive, DirectiveDef, Document, EnumDef, EnumValue, FieldDef, InputObjectDef,
    InputValueDef, InterfaceDef, ObjectDef, ScalarDef, SchemaDef, Type, UnionDef, Value,
};
