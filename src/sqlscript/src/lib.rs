// sqlscript/src/lib.rs

//! Split SQL and DDL scripts into the statements a database driver can
//! execute one at a time.
//!
//! This library provides functionality to:
//! - Tokenize a script into separators, comments, string literals,
//!   identifiers and whitespace, with configurable delimiters
//! - Split the token stream into trimmed, non-empty statements, stripping
//!   comments and collapsing whitespace
//! - Keep vendor `BEGIN ... END` blocks (stored procedure bodies, triggers)
//!   together as single statements, however deeply they nest
//! - Pick a usable separator for scripts that do not use `;`
//!
//! It is not a SQL parser: nothing is validated and no syntax tree is built.

pub mod config;
pub mod constants;
pub mod error;
pub mod scanner;
pub mod splitter;

use log::debug;

pub use config::{ConfigError, ScriptConfig, ScriptConfigBuilder};
pub use error::{ParseFailure, Result, ScriptError};
pub use scanner::{Scanner, Token, TokenKind};
pub use splitter::Splitter;

use constants::{DEFAULT_STATEMENT_SEPARATOR, FALLBACK_STATEMENT_SEPARATOR};

/// Split a script into statements using the given configuration.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), sqlscript::ScriptError> {
///     let config = sqlscript::ScriptConfig::default();
///     let statements = sqlscript::split_script(
///         "INSERT INTO bar (foo) /* ; */ VALUES ('hello world');",
///         &config,
///     )?;
///     assert_eq!(statements, vec!["INSERT INTO bar (foo) VALUES ('hello world')"]);
///     Ok(())
/// }
/// ```
pub fn split_script(script: &str, config: &ScriptConfig) -> Result<Vec<String>> {
    config.validate()?;
    let statements = Splitter::new(Scanner::new(script, config)).split()?;
    debug!(
        "Split script {} with separator {:?} into {} statement(s)",
        config.resource(),
        config.separator(),
        statements.len()
    );
    Ok(statements)
}

/// Split a script given each delimiter explicitly.
///
/// `resource` only names the script in error messages.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sqlscript::ScriptError> {
/// let script = "BEGIN END; \n@\nCALL something();\n@\n";
/// let statements = sqlscript::split_sql_script("proc.sql", script, "@", "--", "/*", "*/")?;
/// assert_eq!(statements, vec!["BEGIN END;", "CALL something();"]);
/// # Ok(())
/// # }
/// ```
pub fn split_sql_script(
    resource: &str,
    script: &str,
    separator: &str,
    comment_prefix: &str,
    block_comment_start: &str,
    block_comment_end: &str,
) -> Result<Vec<String>> {
    let config = ScriptConfig::new(
        resource,
        separator,
        comment_prefix,
        block_comment_start,
        block_comment_end,
    )?;
    split_script(script, &config)
}

/// Does `delimiter` occur in `script` outside of single-quoted literals?
pub fn contains_sql_script_delimiters(script: &str, delimiter: &str) -> bool {
    if delimiter.is_empty() {
        return false;
    }
    let mut in_literal = false;
    for (i, c) in script.char_indices() {
        if c == '\'' {
            in_literal = !in_literal;
        }
        if !in_literal && script[i..].starts_with(delimiter) {
            return true;
        }
    }
    false
}

/// Choose the separator to split `script` with.
///
/// Uses `requested`, or `;` when nothing is requested. If the script never
/// uses that separator outside a literal, every line is taken to be its own
/// statement.
pub fn resolve_separator(script: &str, requested: Option<&str>) -> String {
    let separator = requested.unwrap_or(DEFAULT_STATEMENT_SEPARATOR);
    if contains_sql_script_delimiters(script, separator) {
        separator.to_string()
    } else {
        debug!(
            "Separator {:?} not found in script, falling back to line breaks",
            separator
        );
        FALLBACK_STATEMENT_SEPARATOR.to_string()
    }
}
