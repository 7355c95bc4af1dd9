// sqlscript/src/error.rs

//! Error types for script splitting.
//!
//! Splitting degrades gracefully on almost every malformed input. The only
//! fatal conditions are a block comment or dollar-quoted string that is
//! opened and never closed, and an invalid [`ScriptConfig`](crate::ScriptConfig).

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for sqlscript operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors returned while scanning or splitting a script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The script could not be tokenized.
    #[error("Failed to parse script {resource}: {cause}")]
    Parse {
        resource: String,
        cause: ParseFailure,
    },

    /// The configuration handed to the splitter is unusable.
    #[error("Invalid script configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ScriptError {
    pub fn parse(resource: impl Into<String>, cause: ParseFailure) -> Self {
        ScriptError::Parse {
            resource: resource.into(),
            cause,
        }
    }

    /// The script identifier the error refers to, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            ScriptError::Parse { resource, .. } => Some(resource),
            ScriptError::Config(_) => None,
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ScriptError::Parse { .. })
    }
}

/// Why a script failed to tokenize. Positions are 1-based and point at the
/// opening delimiter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Missing block comment end delimiter [{delimiter}] for comment opened at line {line}, column {column}")]
    UnterminatedBlockComment {
        delimiter: String,
        line: usize,
        column: usize,
    },

    #[error("Unclosed dollar quoted string [{tag}] opened at line {line}, column {column}")]
    UnterminatedDollarQuote {
        tag: String,
        line: usize,
        column: usize,
    },
}
