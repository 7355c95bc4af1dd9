// sqlscript/src/scanner/scanner.rs

//! Cursor-driven scanner over one script.

use super::lexer::{self, Unterminated};
use super::token::{line_column, Token, TokenKind};
use crate::config::ScriptConfig;
use crate::error::{ParseFailure, Result, ScriptError};

const QUOTES: [u8; 3] = [b'\'', b'"', b'`'];

/// Rough lexical scanner for SQL scripts.
///
/// Each call to [`next_token`](Scanner::next_token) classifies the text at
/// the cursor and advances past it. The matchers are tried in this order
/// and the first one that matches wins:
///
/// 1. separator
/// 2. line comment
/// 3. block comment
/// 4. quoted string (`'`, `"`, `` ` ``, then `$tag$`)
/// 5. identifier
/// 6. whitespace
/// 7. any single character
///
/// Concatenating the text of every token returned reproduces the script.
pub struct Scanner<'a> {
    script: &'a str,
    config: &'a ScriptConfig,
    offset: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(script: &'a str, config: &'a ScriptConfig) -> Self {
        Self {
            script,
            config,
            offset: 0,
            failed: false,
        }
    }

    /// Current cursor position (a byte offset into the script).
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.script.len()
    }

    /// Scan the next token. Once the end of input is reached every call
    /// returns an `Eof` token without moving the cursor.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        if self.is_at_end() {
            return Ok(Token::eof(self.script.len()));
        }

        let (kind, len) = self.classify()?;
        let script = self.script;
        let start = self.offset;
        self.offset += len;
        Ok(Token::new(kind, &script[start..self.offset], start))
    }

    fn classify(&self) -> Result<(TokenKind, usize)> {
        let rest = &self.script[self.offset..];
        let config = self.config;

        if let Some(len) = lexer::match_literal(rest, config.separator()) {
            return Ok((TokenKind::Separator, len));
        }
        if let Some(len) = lexer::match_line_comment(rest, config.comment_prefix()) {
            return Ok((TokenKind::Comment, len));
        }
        let block = lexer::match_block_comment(
            rest,
            config.block_comment_start(),
            config.block_comment_end(),
        );
        if let Some(len) = block.map_err(|e| self.unterminated(e))? {
            return Ok((TokenKind::Comment, len));
        }
        if let Some(len) = QUOTES
            .iter()
            .find_map(|quote| lexer::match_quoted_string(rest, *quote))
        {
            return Ok((TokenKind::QuotedString, len));
        }
        let dollar = lexer::match_dollar_quoted_string(rest);
        if let Some(len) = dollar.map_err(|e| self.unterminated(e))? {
            return Ok((TokenKind::QuotedString, len));
        }
        if let Some(len) = lexer::match_identifier(rest) {
            return Ok((TokenKind::Identifier, len));
        }
        if let Some(len) = lexer::match_whitespace(rest) {
            return Ok((TokenKind::Whitespace, len));
        }
        // Never fails: the cursor is before the end of the script.
        let len = lexer::match_single_char(rest).unwrap_or(rest.len());
        Ok((TokenKind::Other, len))
    }

    fn unterminated(&self, what: Unterminated) -> ScriptError {
        let (line, column) = line_column(self.script, self.offset);
        let cause = match what {
            Unterminated::BlockComment => ParseFailure::UnterminatedBlockComment {
                delimiter: self.config.block_comment_end().to_string(),
                line,
                column,
            },
            Unterminated::DollarQuote(tag) => {
                ParseFailure::UnterminatedDollarQuote { tag, line, column }
            }
        };
        ScriptError::parse(self.config.resource(), cause)
    }
}

/// Yields every token before `Eof`. A scan error is yielded once, after
/// which the iterator is exhausted.
impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
