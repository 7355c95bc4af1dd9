// sqlscript/src/config.rs

//! Lexical configuration for one split operation.

use crate::constants::{
    DEFAULT_BLOCK_COMMENT_END_DELIMITER, DEFAULT_BLOCK_COMMENT_START_DELIMITER,
    DEFAULT_COMMENT_PREFIX, DEFAULT_RESOURCE, DEFAULT_STATEMENT_SEPARATOR,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The strings that drive tokenization of a script, plus the identifier
/// used in diagnostics.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs to name what it changes:
///
/// ```yaml
/// separator: "@"
/// comment_prefix: "#"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    resource: String,
    separator: String,
    comment_prefix: String,
    block_comment_start: String,
    block_comment_end: String,
}

impl ScriptConfig {
    /// Create a validated configuration from explicit values.
    pub fn new(
        resource: impl Into<String>,
        separator: impl Into<String>,
        comment_prefix: impl Into<String>,
        block_comment_start: impl Into<String>,
        block_comment_end: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            resource: resource.into(),
            separator: separator.into(),
            comment_prefix: comment_prefix.into(),
            block_comment_start: block_comment_start.into(),
            block_comment_end: block_comment_end.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn builder() -> ScriptConfigBuilder {
        ScriptConfigBuilder::default()
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    pub fn block_comment_start(&self) -> &str {
        &self.block_comment_start
    }

    pub fn block_comment_end(&self) -> &str {
        &self.block_comment_end
    }

    /// A copy of this configuration with a different separator.
    pub fn with_separator(&self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self.clone()
        }
    }

    /// A copy of this configuration reporting a different resource name.
    pub fn with_resource(&self, resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..self.clone()
        }
    }

    /// Check that every delimiter is non-empty.
    ///
    /// An empty separator would match at every offset without consuming
    /// input, so the scanner could never make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("separator", &self.separator),
            ("comment_prefix", &self.comment_prefix),
            ("block_comment_start", &self.block_comment_start),
            ("block_comment_end", &self.block_comment_end),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE.to_string(),
            separator: DEFAULT_STATEMENT_SEPARATOR.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            block_comment_start: DEFAULT_BLOCK_COMMENT_START_DELIMITER.to_string(),
            block_comment_end: DEFAULT_BLOCK_COMMENT_END_DELIMITER.to_string(),
        }
    }
}

/// Builder for [`ScriptConfig`].
///
/// The four lexical strings must be set explicitly; the resource name falls
/// back to [`DEFAULT_RESOURCE`].
#[derive(Debug, Default, Clone)]
pub struct ScriptConfigBuilder {
    resource: Option<String>,
    separator: Option<String>,
    comment_prefix: Option<String>,
    block_comment_start: Option<String>,
    block_comment_end: Option<String>,
}

impl ScriptConfigBuilder {
    /// Start from an existing configuration, every field pre-set.
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self {
            resource: Some(config.resource.clone()),
            separator: Some(config.separator.clone()),
            comment_prefix: Some(config.comment_prefix.clone()),
            block_comment_start: Some(config.block_comment_start.clone()),
            block_comment_end: Some(config.block_comment_end.clone()),
        }
    }

    pub fn build(&self) -> Result<ScriptConfig, ConfigError> {
        let separator = self
            .separator
            .clone()
            .ok_or_else(|| ConfigError::UninitializedField("separator"))?;
        let comment_prefix = self
            .comment_prefix
            .clone()
            .ok_or_else(|| ConfigError::UninitializedField("comment_prefix"))?;
        let block_comment_start = self
            .block_comment_start
            .clone()
            .ok_or_else(|| ConfigError::UninitializedField("block_comment_start"))?;
        let block_comment_end = self
            .block_comment_end
            .clone()
            .ok_or_else(|| ConfigError::UninitializedField("block_comment_end"))?;
        let resource = self
            .resource
            .clone()
            .unwrap_or_else(|| DEFAULT_RESOURCE.to_string());
        ScriptConfig::new(
            resource,
            separator,
            comment_prefix,
            block_comment_start,
            block_comment_end,
        )
    }
    pub fn resource(&mut self, resource: impl Into<String>) -> &mut Self {
        self.resource = Some(resource.into());
        self
    }
    pub fn separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = Some(separator.into());
        self
    }
    pub fn comment_prefix(&mut self, comment_prefix: impl Into<String>) -> &mut Self {
        self.comment_prefix = Some(comment_prefix.into());
        self
    }
    pub fn block_comment_start(&mut self, block_comment_start: impl Into<String>) -> &mut Self {
        self.block_comment_start = Some(block_comment_start.into());
        self
    }
    pub fn block_comment_end(&mut self, block_comment_end: impl Into<String>) -> &mut Self {
        self.block_comment_end = Some(block_comment_end.into());
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Uninitialized field on ScriptConfigBuilder: {0}")]
    UninitializedField(&'static str),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
