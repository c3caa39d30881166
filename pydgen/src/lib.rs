//! # pydgen
//!
//! Generate pydantic models from GraphQL schemas.
//!
//! Object, interface and input types become `BaseModel` subclasses, enums
//! become string enums and unions become `Union[...]` aliases. Nullable
//! fields are `Optional`, field names that clash with Python keywords are
//! aliased, and declarations are ordered so base classes come first even in
//! recursive schemas.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pydgen::prelude::*;
//!
//! let config = CodegenConfig::new().scalar("DateTime", ScalarTarget::named("datetime"));
//! let python = generate_from_sdl("type User { id: ID! }", &config)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - GraphQL SDL parsing
//! - [`codegen`] - Python code generation
//! - [`config`] - `pydgen.toml` loading

pub mod config;
pub mod error;
pub mod prelude;

/// GraphQL SDL parsing.
pub mod schema {
    pub use pydgen_schema::*;
}

/// Python code generation.
pub mod codegen {
    pub use pydgen_codegen::*;
}

pub use config::FileConfig;
pub use error::ConfigError;

pub use pydgen_codegen::{
    CodegenConfig, CodegenError, EnumStyle, Generator, ScalarTarget, generate_from_file,
    generate_from_sdl, translate,
};
pub use pydgen_schema::{Document, ParseError, parse_document};
