// sqlscript-cli/src/cli/split.rs

use super::{read_script, OutputFormat};
use crate::config::ScriptOptions;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Split the script at `path` and write its statements to `out`.
///
/// Returns the number of statements written.
pub fn split_file<W: Write>(
    path: &Path,
    options: &ScriptOptions,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let script = read_script(path)?;
    let config = options.script_config(path, &script)?;

    log::info!("Splitting script {}", path.display());
    let statements = sqlscript::split_script(&script, &config)?;

    match format {
        OutputFormat::Text => {
            let mut first = true;
            for statement in &statements {
                if !first {
                    writeln!(out)?;
                }
                writeln!(out, "{}", statement)?;
                first = false;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &statements)
                .context("Error writing statements as JSON")?;
            writeln!(out)?;
        }
    }
    log::info!("Wrote {} statement(s) from {}", statements.len(), path.display());
    Ok(statements.len())
}
