// sqlscript-cli/src/cli/mod.rs

pub mod split;
pub mod tokens;

pub use split::split_file;
pub use tokens::dump_tokens;

use anyhow::Context;
use clap::ValueEnum;
use std::path::Path;

/// How results are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// A JSON array
    Json,
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    fs_err::read_to_string(path).context(format!("Error reading script {}", path.display()))
}
