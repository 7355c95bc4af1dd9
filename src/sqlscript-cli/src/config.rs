// sqlscript-cli/src/config.rs

use anyhow::Context;
use clap::Args;
use sqlscript::{resolve_separator, ScriptConfig, ScriptConfigBuilder};
use std::path::{Path, PathBuf};

/// Delimiter settings shared by every subcommand.
///
/// Precedence, lowest first: built-in defaults, the `--config` file, then
/// the individual flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ScriptOptions {
    /// YAML file with delimiter settings
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Statement separator
    #[arg(short, long, global = true, env = "SQLSPLIT_SEPARATOR")]
    pub separator: Option<String>,

    /// Prefix of line comments
    #[arg(long, global = true)]
    pub comment_prefix: Option<String>,

    /// Start delimiter of block comments
    #[arg(long, global = true)]
    pub block_comment_start: Option<String>,

    /// End delimiter of block comments
    #[arg(long, global = true)]
    pub block_comment_end: Option<String>,

    /// Split on line breaks if the script never uses the separator
    #[arg(long, global = true)]
    pub auto_separator: bool,
}

impl ScriptOptions {
    /// Build the configuration used to split `script`, read from `path`.
    pub fn script_config(&self, path: &Path, script: &str) -> anyhow::Result<ScriptConfig> {
        let base = match &self.config {
            Some(config_path) => read_config_file(config_path)?,
            None => ScriptConfig::default(),
        };

        let mut builder = ScriptConfigBuilder::from_config(&base);
        builder.resource(path.display().to_string());
        if let Some(separator) = &self.separator {
            builder.separator(separator);
        }
        if let Some(prefix) = &self.comment_prefix {
            builder.comment_prefix(prefix);
        }
        if let Some(start) = &self.block_comment_start {
            builder.block_comment_start(start);
        }
        if let Some(end) = &self.block_comment_end {
            builder.block_comment_end(end);
        }
        let config = builder.build().context("Invalid delimiter settings")?;

        if self.auto_separator {
            let separator = resolve_separator(script, Some(config.separator()));
            if separator != config.separator() {
                log::info!(
                    "{} does not use {:?}, splitting on line breaks",
                    path.display(),
                    config.separator()
                );
            }
            return Ok(config.with_separator(separator));
        }
        Ok(config)
    }
}

/// Read delimiter settings from a YAML file. Keys left out keep their
/// defaults.
pub fn read_config_file(path: &Path) -> anyhow::Result<ScriptConfig> {
    let content = fs_err::read_to_string(path)
        .context(format!("Error reading {} to string.", path.display()))?;

    let config = serde_saphyr::from_str::<ScriptConfig>(&content)
        .context(format!("Error parsing YAML file: {}", path.display()))?;
    config
        .validate()
        .context(format!("Invalid settings in {}", path.display()))?;
    Ok(config)
}
