use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::args::ConvertArgs;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::load_config;

pub fn convert(input: &Path, output: &Path, args: &ConvertArgs) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd)?.config;

    let options = config.to_convert_options(args.name.clone(), args.keep_comments)?;
    let summary = crate::core::convert(input, output, &options)?;

    report::print_summary(&summary, args.verbose);

    Ok(ExitStatus::Success)
}
