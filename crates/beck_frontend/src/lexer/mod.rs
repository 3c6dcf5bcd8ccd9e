//! Lexical analysis.
//!
//! The lexer walks the source with a byte cursor and, at each position, tries
//! every row of [`TOKEN_TABLE`] in order, taking the first pattern that
//! matches anchored at the cursor. Whitespace is skipped between tokens. The
//! first position where no row matches aborts the whole scan.

#[cfg(test)]
mod tests;

use beck_session::diagnostics::prelude::*;

use crate::token::{Token, TokenKind, TOKEN_TABLE};

#[derive(serde::Serialize, Debug)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(serde::Serialize, thiserror::Error, Debug)]
pub enum LexErrorKind {
    #[error("unrecognized input starting with {0:?}")]
    UnrecognizedInput(char),
}

impl IntoDiagnostic for LexError {
    fn into_diagnostic(self, source_id: SourceId) -> Diagnostic {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(
                self.kind.to_string(),
                source_id,
                self.span,
            ))
    }
}

pub type LexResult<T> = Result<T, LexError>;

pub struct Lexer<'src> {
    all: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            pos: 0,
        }
    }

    pub fn lex(mut self) -> LexResult<TokenCursor> {
        let mut tokens = vec![];

        self.skip_whitespace();
        while self.pos < self.all.len() {
            tokens.push(self.lex_token()?);
            self.skip_whitespace();
        }

        Ok(TokenCursor::new(tokens, self.all.len()))
    }

    fn lex_token(&mut self) -> LexResult<Token> {
        let rest = &self.all[self.pos..];

        for rule in &TOKEN_TABLE {
            if let Some(len) = rule.pattern.match_at(rest) {
                let span = Span::new(self.pos, self.pos + len);
                self.pos += len;
                return Ok(Token {
                    kind: rule.kind,
                    span,
                });
            }
        }

        // The span covers the whole unmatched remainder.
        Err(LexError {
            kind: LexErrorKind::UnrecognizedInput(rest.chars().next().unwrap_or('\0')),
            span: Span::new(self.pos, self.all.len()),
        })
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.all.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }
}

/// The remaining tokens of a scan, consumed destructively from the front.
///
/// The parser owns one of these and never backtracks; tests can build a
/// cursor from a raw token vector to feed partial sequences directly.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: std::vec::IntoIter<Token>,
    prev_span: Span,
    eof_span: Span,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>, source_len: usize) -> Self {
        Self {
            tokens: tokens.into_iter(),
            prev_span: Span::empty(0),
            eof_span: Span::empty(source_len),
        }
    }

    pub fn peek(&self) -> Option<Token> {
        self.tokens.as_slice().first().copied()
    }

    /// One token of lookahead beyond the front, used to tell calls and
    /// additions apart from plain variable references.
    pub fn peek_second(&self) -> Option<Token> {
        self.tokens.as_slice().get(1).copied()
    }

    /// Consume the front token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(token) if token == kind => {
                self.next();
                true
            }
            _ => false,
        }
    }

    pub fn at_end(&self) -> bool {
        self.tokens.as_slice().is_empty()
    }

    pub fn prev_span(&self) -> Span {
        self.prev_span
    }

    pub fn eof_span(&self) -> Span {
        self.eof_span
    }
}

impl Iterator for TokenCursor {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.prev_span = token.span;
        Some(token)
    }
}
