// sqlscript/src/splitter.rs

//! Statement assembly on top of the scanner.
//!
//! Outside of `BEGIN ... END` blocks the splitter strips comments, shrinks
//! whitespace and cuts on the separator. Inside a block it keeps the text
//! verbatim and ignores separators until the block's closing `END`.

use crate::constants::DEFAULT_STATEMENT_SEPARATOR;
use crate::error::Result;
use crate::scanner::{Scanner, Token, TokenKind};
use log::{trace, warn};

/// One open `BEGIN ... END` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockFrame {
    /// The block that started the statement, as opposed to one nested in it.
    outermost: bool,
}

/// How the lookahead after an `END` keyword resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockEnd {
    Closed,
    Continued,
}

/// Whitespace seen in standard mode but not yet written to the buffer.
#[derive(Debug, Clone, Copy, Default)]
struct PendingWhitespace {
    seen: bool,
    had_line_break: bool,
}

/// Splits the token stream of one script into statements.
pub struct Splitter<'a> {
    scanner: Scanner<'a>,
    statements: Vec<String>,
    buffer: String,
    pending: PendingWhitespace,
}

impl<'a> Splitter<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            statements: Vec::new(),
            buffer: String::new(),
            pending: PendingWhitespace::default(),
        }
    }

    /// Run to the end of the script and return the statements in order.
    pub fn split(mut self) -> Result<Vec<String>> {
        loop {
            let token = self.scanner.next_token()?;
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Separator => {
                    self.pending = PendingWhitespace::default();
                    self.flush();
                }
                TokenKind::Comment => {}
                TokenKind::Whitespace => {
                    self.pending.seen = true;
                    self.pending.had_line_break = token.text.contains(['\n', '\r']);
                }
                TokenKind::Identifier if token.is_keyword("begin") => {
                    self.emit_pending_whitespace(&token);
                    self.buffer.push_str(token.text);
                    self.compound_statement()?;
                    self.flush();
                }
                _ => {
                    self.emit_pending_whitespace(&token);
                    self.buffer.push_str(token.text);
                }
            }
        }
        self.flush();
        Ok(self.statements)
    }

    /// Write deferred whitespace ahead of `next` as a single space, or as a
    /// line break when it separates two string literals (PostgreSQL only
    /// concatenates adjacent literals across a newline).
    fn emit_pending_whitespace(&mut self, next: &Token<'_>) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.seen || self.buffer.is_empty() {
            return;
        }
        let after_literal = self.buffer.ends_with(['\'', '"']);
        let fill = if pending.had_line_break && after_literal && next.kind == TokenKind::QuotedString {
            '\n'
        } else {
            ' '
        };
        if !self.buffer.ends_with(fill) {
            self.buffer.push(fill);
        }
    }

    /// Consume a `BEGIN ... END` block whose opening keyword is already in
    /// the buffer. Comments, whitespace and separators are kept verbatim.
    fn compound_statement(&mut self) -> Result<()> {
        let mut blocks = vec![BlockFrame { outermost: true }];
        trace!("entering compound statement at offset {}", self.scanner.offset());

        while let Some(&frame) = blocks.last() {
            let token = self.scanner.next_token()?;
            if token.is_eof() {
                warn!(
                    "{} open BEGIN block(s) at end of input; flushing the remaining text as one statement",
                    blocks.len()
                );
                self.flush();
                return Ok(());
            }
            self.buffer.push_str(token.text);

            if token.is_keyword("begin") {
                blocks.push(BlockFrame { outermost: false });
                trace!("nested block, depth {}", blocks.len());
            } else if token.is_keyword("end") && self.end_of_block(frame)? == BlockEnd::Closed {
                blocks.pop();
                trace!("block closed, depth {}", blocks.len());
            }
        }
        Ok(())
    }

    /// Decide whether the `END` just buffered closes `frame`.
    ///
    /// Comments and whitespace after it are held back. If the next real token
    /// is the separator (or a literal `;` when a custom separator is in use)
    /// the block is closed. A nested block keeps the held text and the
    /// separator; the outermost block drops the held text, and the separator
    /// becomes the statement boundary. Anything else, such as `LOOP` in
    /// `END LOOP`, means the block continues.
    fn end_of_block(&mut self, frame: BlockFrame) -> Result<BlockEnd> {
        let mut held = String::new();
        loop {
            let token = self.scanner.next_token()?;
            match token.kind {
                TokenKind::Eof => return Ok(BlockEnd::Closed),
                _ if token.is_trivia() => held.push_str(token.text),
                TokenKind::Separator => {
                    if !frame.outermost {
                        self.buffer.push_str(&held);
                        self.buffer.push_str(token.text);
                    }
                    return Ok(BlockEnd::Closed);
                }
                _ if token.text == DEFAULT_STATEMENT_SEPARATOR => {
                    if !frame.outermost {
                        self.buffer.push_str(&held);
                    }
                    self.buffer.push_str(token.text);
                    return Ok(BlockEnd::Closed);
                }
                _ => {
                    self.buffer.push_str(&held);
                    self.buffer.push_str(token.text);
                    return Ok(BlockEnd::Continued);
                }
            }
        }
    }

    fn flush(&mut self) {
        let statement = self.buffer.trim();
        if !statement.is_empty() {
            self.statements.push(statement.to_string());
        }
        self.buffer.clear();
    }
}
