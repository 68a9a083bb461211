//! css-vars-to-ts - CSS custom properties to TypeScript
//!
//! Reads the first `:root { ... }` block of a stylesheet and generates a
//! TypeScript module exposing its custom properties as grouped constants,
//! an aggregated export object and a key-union type.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, code generation and file conversion

pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::{
    CssVariables, ExtractOptions, GenerateOptions, convert, extract, generate,
};
