use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{ConvertOptions, DEFAULT_EXPORT_NAME};

pub const CONFIG_FILE_NAME: &str = ".cssvarsrc.json";

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_export_name")]
    pub export_name: String,
    #[serde(default = "default_remove_comments")]
    pub remove_comments: bool,
}

fn default_export_name() -> String {
    DEFAULT_EXPORT_NAME.to_string()
}

fn default_remove_comments() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_name: default_export_name(),
            remove_comments: default_remove_comments(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// An empty `exportName` is allowed and means the default name.
    pub fn validate(&self) -> Result<()> {
        validate_export_name(&self.export_name).context("Invalid 'exportName' in config")
    }

    /// Build conversion options, letting command-line values take precedence.
    ///
    /// A `--name` value is held to the same identifier rule as `exportName`.
    pub fn to_convert_options(
        &self,
        name: Option<String>,
        keep_comments: bool,
    ) -> Result<ConvertOptions> {
        if let Some(name) = &name {
            validate_export_name(name).context("Invalid value for '--name'")?;
        }
        Ok(ConvertOptions {
            export_name: name.or_else(|| Some(self.export_name.clone())),
            remove_comments: self.remove_comments && !keep_comments,
        })
    }
}

/// Check that an export name can be used as a TypeScript identifier.
///
/// Empty names pass; they select the default export name.
pub fn validate_export_name(name: &str) -> Result<()> {
    if !name.is_empty() && !IDENTIFIER_REGEX.is_match(name) {
        bail!("\"{}\" is not a valid identifier", name);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
