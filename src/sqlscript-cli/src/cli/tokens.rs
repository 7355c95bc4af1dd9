// sqlscript-cli/src/cli/tokens.rs

use super::{read_script, OutputFormat};
use crate::config::ScriptOptions;
use anyhow::Context;
use sqlscript::scanner::scan;
use std::io::Write;
use std::path::Path;

/// Write the scanner's token stream for the script at `path` to `out`.
///
/// Useful for finding out why a script splits the way it does.
pub fn dump_tokens<W: Write>(
    path: &Path,
    options: &ScriptOptions,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let script = read_script(path)?;
    let config = options.script_config(path, &script)?;
    let tokens = scan(&script, &config)?;

    match format {
        OutputFormat::Text => {
            for token in &tokens {
                let (line, column) = token.line_column(&script);
                writeln!(
                    out,
                    "{:>4}:{:<4} {:>6}..{:<6} {:<12} {:?}",
                    line,
                    column,
                    token.start,
                    token.end,
                    format!("{:?}", token.kind),
                    token.text
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)
                .context("Error writing tokens as JSON")?;
            writeln!(out)?;
        }
    }
    Ok(tokens.len())
}
