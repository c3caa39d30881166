//! Prelude module for convenient imports.
//!
//! ```ignore
//! use pydgen::prelude::*;
//! ```

// Schema types
pub use pydgen_schema::{Definition, Document, ParseError, Type, parse_document};

// Generation
pub use pydgen_codegen::{
    CodegenConfig, CodegenError, EnumStyle, Generator, ScalarOverrides, ScalarTarget,
    generate_from_file, generate_from_sdl, translate,
};

// Configuration files
pub use crate::config::FileConfig;
pub use crate::error::ConfigError;
