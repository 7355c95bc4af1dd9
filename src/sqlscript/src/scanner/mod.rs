// sqlscript/src/scanner/mod.rs

//! Lexical scanner for SQL scripts.
//!
//! The scanner does not understand SQL. It only sorts runs of characters
//! into a handful of categories (separators, comments, literals,
//! identifiers, whitespace, everything else) so that the splitter can tell
//! where a statement ends.

pub mod lexer;
pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use crate::config::ScriptConfig;
use crate::error::Result;

/// Convenience function to scan a whole script, including the final `Eof`.
pub fn scan<'a>(script: &'a str, config: &'a ScriptConfig) -> Result<Vec<Token<'a>>> {
    config.validate()?;
    let mut scanner = Scanner::new(script, config);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
