// sqlscript/src/constants.rs

/// Default statement separator within SQL scripts.
pub const DEFAULT_STATEMENT_SEPARATOR: &str = ";";

/// Separator used when a script contains neither the requested nor the
/// default separator outside of string literals.
pub const FALLBACK_STATEMENT_SEPARATOR: &str = "\n";

/// Default prefix for line comments.
pub const DEFAULT_COMMENT_PREFIX: &str = "--";

/// Default start delimiter for block comments.
pub const DEFAULT_BLOCK_COMMENT_START_DELIMITER: &str = "/*";

/// Default end delimiter for block comments.
pub const DEFAULT_BLOCK_COMMENT_END_DELIMITER: &str = "*/";

/// Resource name reported for scripts that did not come from a file.
pub const DEFAULT_RESOURCE: &str = "<inline script>";
