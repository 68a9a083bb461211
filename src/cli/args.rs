//! CLI argument definitions using clap.
//!
//! The default invocation converts a stylesheet:
//!
//! ```text
//! css-vars-to-ts <INPUT> <OUTPUT> [--name <NAME>] [--keep-comments]
//! ```
//!
//! `init` writes a default configuration file instead.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

impl Arguments {
    /// Print help to stdout. Used when required paths are missing.
    pub fn print_help() {
        Self::command().print_help().ok();
    }
}

/// Arguments for converting a stylesheet.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Stylesheet containing a :root block (write a file named `init` as ./init)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// TypeScript file to write
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Export name for the generated object (default: "colors")
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Keep CSS comments in processing
    #[arg(long)]
    pub keep_comments: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .cssvarsrc.json configuration file
    Init,
}
