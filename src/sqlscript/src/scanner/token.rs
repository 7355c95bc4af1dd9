// sqlscript/src/scanner/token.rs

//! Token types produced by the script scanner.

use serde::Serialize;
use std::fmt;

/// One classified, contiguous run of script text.
///
/// `text` borrows from the scanned script; `start..end` is its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact text matched
    pub text: &'a str,
    /// Byte offset where the token starts
    pub start: usize,
    /// Byte offset just past the token (the scanner cursor after the match)
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self {
            kind,
            text,
            start,
            end: start + text.len(),
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", offset)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Comments and whitespace carry no statement content of their own.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::Whitespace)
    }

    /// True for an identifier equal to `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text.eq_ignore_ascii_case(keyword)
    }

    /// 1-based line and column of the token start within `script`.
    pub fn line_column(&self, script: &str) -> (usize, usize) {
        line_column(script, self.start)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

/// Lexical categories recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// The configured statement separator
    Separator,
    /// Line or block comment, delimiters included
    Comment,
    /// Quoted (`'`, `"`, `` ` ``) or dollar-quoted string literal
    QuotedString,
    /// Run of whitespace
    Whitespace,
    /// Letter followed by letters, digits, `_` or `$`
    Identifier,
    /// Any single character nothing else matched
    Other,
    /// End of input
    Eof,
}

/// 1-based line and column (in characters) of a byte offset.
pub(crate) fn line_column(script: &str, offset: usize) -> (usize, usize) {
    let prefix = &script[..offset.min(script.len())];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    (line, column)
}
