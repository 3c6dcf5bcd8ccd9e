//! Recursive-descent parsing.
//!
//! The parser consumes a [`TokenCursor`] destructively from the front and
//! never backtracks: the grammar is resolvable with one token of lookahead,
//! plus a second-token peek to dispatch between calls, additions and plain
//! variable references. The first mismatch aborts the whole parse.


mod expr;

use beck_session::diagnostics::prelude::*;

use crate::ast::*;
use crate::lexer::TokenCursor;
use crate::token::{Token, TokenKind};

#[derive(serde::Serialize, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(serde::Serialize, thiserror::Error, Debug)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    TokenMismatch {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: TokenKind },

    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

impl IntoDiagnostic for ParseError {
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

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'src> {
    source: &'src str,
    tokens: TokenCursor,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: TokenCursor) -> Self {
        Self { source, tokens }
    }

    /// Parse the whole token sequence as a run of definitions. An empty
    /// sequence is a valid, empty module.
    pub fn parse(mut self) -> ParseResult<Module> {
        let mut defs = vec![];

        while !self.tokens.at_end() {
            defs.push(self.parse_def()?);
        }

        Ok(Module { defs })
    }

    fn parse_def(&mut self) -> ParseResult<Def> {
        self.expect(TokenKind::Def)?;
        let name = self.parse_ident()?;
        let params = self.parse_param_names()?;
        let body = self.parse_expr()?;
        self.expect(TokenKind::End)?;

        Ok(Def { name, params, body })
    }

    fn parse_param_names(&mut self) -> ParseResult<Vec<Ident>> {
        self.expect(TokenKind::OParen)?;

        let mut params = vec![];
        if self
            .tokens
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Identifier)
        {
            params.push(self.parse_ident()?);
            while self.tokens.eat(TokenKind::Comma) {
                params.push(self.parse_ident()?);
            }
        }

        self.expect(TokenKind::CParen)?;
        Ok(params)
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Ident {
            text: token.text(self.source).to_owned(),
            span: token.span,
        })
    }

    /// Pop the front token, requiring it to have the given kind.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.tokens.next() {
            Some(token) if token == kind => Ok(token),

            Some(token) => Err(ParseError {
                kind: ParseErrorKind::TokenMismatch {
                    expected: kind,
                    found: token.kind,
                },
                span: token.span,
            }),

            None => Err(ParseError {
                kind: ParseErrorKind::UnexpectedEof { expected: kind },
                span: self.tokens.eof_span(),
            }),
        }
    }
}
