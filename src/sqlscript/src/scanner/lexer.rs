// sqlscript/src/scanner/lexer.rs

//! Low-level matchers for script tokens.
//!
//! Every matcher looks only at the start of `rest` (the script from the
//! cursor onwards) and returns the byte length of its match. None of them
//! searches ahead for a later start; the [`Scanner`](super::Scanner)
//! decides which matcher wins by trying them in a fixed order.

/// A token whose closing delimiter never appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unterminated {
    BlockComment,
    DollarQuote(String),
}

/// Length of `literal` if `rest` starts with it.
pub fn match_literal(rest: &str, literal: &str) -> Option<usize> {
    if !literal.is_empty() && rest.starts_with(literal) {
        Some(literal.len())
    } else {
        None
    }
}

/// A line comment runs from `prefix` through the line break that ends it,
/// including any further `\n`/`\r` directly after it, or to end of input.
pub fn match_line_comment(rest: &str, prefix: &str) -> Option<usize> {
    let body_start = match_literal(rest, prefix)?;
    let body = &rest[body_start..];
    let len = match body.find(['\n', '\r']) {
        Some(eol) => {
            let breaks = body[eol..]
                .bytes()
                .take_while(|b| *b == b'\n' || *b == b'\r')
                .count();
            body_start + eol + breaks
        }
        None => rest.len(),
    };
    Some(len)
}

/// A block comment runs from `start` to and including the next `end`.
pub fn match_block_comment(
    rest: &str,
    start: &str,
    end: &str,
) -> Result<Option<usize>, Unterminated> {
    let Some(body_start) = match_literal(rest, start) else {
        return Ok(None);
    };
    match rest[body_start..].find(end) {
        Some(idx) => Ok(Some(body_start + idx + end.len())),
        None => Err(Unterminated::BlockComment),
    }
}

/// A literal delimited by `quote`.
///
/// A backslash escapes the character after it, and a doubled quote stands
/// for one quote character. An unterminated literal does not match.
pub fn match_quoted_string(rest: &str, quote: u8) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&quote) {
        return None;
    }
    let mut escaped = false;
    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 1;
            } else {
                return Some(i + 1);
            }
        }
        i += 1;
    }
    None
}

/// A PostgreSQL dollar-quoted literal: `$tag$ ... $tag$`, where the tag is
/// zero or more word characters.
pub fn match_dollar_quoted_string(rest: &str) -> Result<Option<usize>, Unterminated> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'$') {
        return Ok(None);
    }
    let word = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    if bytes.get(1 + word) != Some(&b'$') {
        return Ok(None);
    }
    let tag_len = word + 2;
    let tag = &rest[..tag_len];
    match rest[tag_len..].find(tag) {
        Some(idx) => Ok(Some(tag_len + idx + tag_len)),
        None => Err(Unterminated::DollarQuote(tag.to_string())),
    }
}

/// An ASCII letter followed by letters, digits, `_` or `$`.
pub fn match_identifier(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }
    let tail = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_' || **b == b'$')
        .count();
    Some(1 + tail)
}

/// A maximal run of ASCII whitespace: space, `\t`, `\n`, `\x0B`, `\x0C`
/// or `\r`. Other Unicode spaces are left to the single-character matcher.
pub fn match_whitespace(rest: &str) -> Option<usize> {
    let len = rest
        .bytes()
        .take_while(|b| matches!(*b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'))
        .count();
    (len > 0).then_some(len)
}

/// Exactly one character.
pub fn match_single_char(rest: &str) -> Option<usize> {
    rest.chars().next().map(char::len_utf8)
}
