//! Conversion engine.
//!
//! Two pure stages run in sequence:
//!
//! 1. [`extract`]: stylesheet text → normalized variables
//! 2. [`generate`]: variables → TypeScript module source
//!
//! [`convert`] wraps both with file I/O.

mod convert;
mod extract;
mod generate;

pub use convert::{ConvertOptions, ConvertSummary, GroupSummary, InputNotFound, convert};
pub use extract::{CssVariables, ExtractOptions, extract, normalize_name, strip_comments};
pub use generate::{
    ColorGroup, DEFAULT_EXPORT_NAME, GenerateOptions, generate, group_variables, type_name,
    ungrouped_keys,
};
