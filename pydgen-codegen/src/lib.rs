//! # pydgen Codegen
//!
//! Pydantic model generation from GraphQL schemas.
//!
//! This crate provides:
//! - Translation of object, interface, input, enum and union types into
//!   Python classes and aliases
//! - A configurable GraphQL scalar to Python type table
//! - Aliasing of field names that collide with reserved identifiers
//! - Dependency ordering that tolerates recursive schemas

pub mod assembler;
pub mod config;
pub mod declaration;
pub mod error;
pub mod generator;
pub mod graph;
pub mod python;
pub mod scalars;

pub use assembler::DocumentAssembler;
pub use config::{CodegenConfig, EnumStyle};
pub use declaration::Declaration;
pub use error::CodegenError;
pub use generator::Generator;
pub use graph::DependencyGraph;
pub use scalars::{ScalarMap, ScalarOverrides, ScalarTarget, parse_override};

use pydgen_schema::Document;
use std::path::Path;

/// Translates a parsed document with the given scalar overrides.
///
/// Never fails: unsupported definitions are skipped, reserved field names
/// are aliased and dependency cycles are broken.
#[must_use]
pub fn translate(document: &Document, overrides: &ScalarOverrides) -> String {
    let config = CodegenConfig::new().scalars(overrides.clone());
    Generator::new(config).generate(document)
}

/// Generates a Python module from GraphQL SDL.
///
/// # Arguments
/// * `sdl` - GraphQL schema definition language text
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be parsed.
pub fn generate_from_sdl(sdl: &str, config: &CodegenConfig) -> Result<String, CodegenError> {
    let document = pydgen_schema::parse_document(sdl)?;
    Ok(Generator::new(config.clone()).generate(&document))
}

/// Generates a Python module from a GraphQL schema file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &Path, config: &CodegenConfig) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, config)
}
