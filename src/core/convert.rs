//! File-level conversion: read a stylesheet, extract, generate, write.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::extract::{ExtractOptions, extract};
use super::generate::{GenerateOptions, generate, group_variables, ungrouped_keys};

/// Returned when the input stylesheet does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNotFound {
    pub path: PathBuf,
}

impl fmt::Display for InputNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input file not found: {}", self.path.display())
    }
}

impl std::error::Error for InputNotFound {}

/// Options for a single file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub export_name: Option<String>,
    pub remove_comments: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            export_name: None,
            remove_comments: true,
        }
    }
}

/// A generated group and how many variables it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub const_name: String,
    pub variable_count: usize,
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub export_name: String,
    /// Number of variables extracted from the `:root` block.
    pub variable_count: usize,
    pub groups: Vec<GroupSummary>,
    /// Extracted keys with no underscore, which are not exported.
    pub skipped: Vec<String>,
}

/// Convert the stylesheet at `input` into a TypeScript module at `output`.
///
/// Missing parent directories of `output` are created. Nothing is written if
/// any step before the write fails.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    if !input.exists() {
        return Err(InputNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let variables = extract(
        &content,
        ExtractOptions {
            remove_comments: options.remove_comments,
        },
    );

    let generate_options = GenerateOptions {
        export_name: options.export_name.clone(),
    };
    let code = generate(&variables, &generate_options);

    fs::write(output, &code)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    let groups = group_variables(&variables)
        .iter()
        .map(|group| GroupSummary {
            const_name: group.const_name(),
            variable_count: group.entries.len(),
        })
        .collect();

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        export_name: generate_options.export_name().to_string(),
        variable_count: variables.len(),
        groups,
        skipped: ungrouped_keys(&variables)
            .into_iter()
            .map(String::from)
            .collect(),
    })
}
