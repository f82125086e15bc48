//! Logos-based tokenizer for xorg.conf lines
//!
//! Splits a single option/reference line into tokens. A `"` toggles quoting:
//! whitespace inside quotes is token content, quote characters are not, and
//! text touching a quoted span belongs to the same token (`a"b c"` is one
//! token `ab c`). Lines without quotes split on whitespace. A `#` that starts
//! a token outside quotes begins a trailing comment.

use logos::Logos;
use smol_str::SmolStr;
use std::ops::Range;

/// A token with its text and whether any part of it was quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: SmolStr,
    pub quoted: bool,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    pending: Option<(LogosToken, Range<usize>)>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            inner: LogosToken::lexer(input),
            pending: None,
            finished: false,
        }
    }

    fn next_raw(&mut self) -> Option<(LogosToken, Range<usize>)> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        let kind = self.inner.next()?.unwrap_or(LogosToken::Bare);
        Some((kind, self.inner.span()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut text = String::new();
        let mut quoted = false;
        let mut end: Option<usize> = None;

        while let Some((kind, span)) = self.next_raw() {
            if kind == LogosToken::Comment {
                self.finished = true;
                break;
            }
            // Whitespace between lexemes ends the token
            if end.is_some_and(|prev| prev != span.start) {
                self.pending = Some((kind, span));
                break;
            }
            let slice = &self.source[span.clone()];
            match kind {
                LogosToken::Quoted => {
                    quoted = true;
                    text.push_str(unquote(slice));
                }
                _ => text.push_str(slice),
            }
            end = Some(span.end);
        }

        end.map(|_| Token {
            text: SmolStr::from(text),
            quoted,
        })
    }
}

/// Strip the opening quote and, when present, the closing one.
fn unquote(slice: &str) -> &str {
    let inner = &slice[1..];
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Tokenize a line, dropping empty quoted tokens.
pub fn tokenize(line: &str) -> Vec<Token> {
    Lexer::new(line).filter(|t| !t.text.is_empty()).collect()
}

/// Tokenize a line, keeping a trailing empty quoted token.
///
/// `Identifier ""` yields two tokens here and one from [`tokenize`].
pub fn tokenize_with_empty(line: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Lexer::new(line).collect();
    let trailing_empty = match tokens.last() {
        Some(last) if last.text.is_empty() && last.quoted => tokens.pop(),
        _ => None,
    };
    tokens.retain(|t| !t.text.is_empty());
    tokens.extend(trailing_empty);
    tokens
}

/// Logos token enum
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    #[regex(r#""[^"]*"?"#)]
    Quoted,

    #[regex(r##"[^ \t\r\n\f"#][^ \t\r\n\f"]*"##)]
    Bare,

    #[regex(r"#[^\n]*")]
    Comment,
}
