#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod token;

pub use lexer::{LexError, LexErrorKind, LexResult, Lexer, TokenCursor};
pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser};

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

pub fn lex(source: &str) -> LexResult<TokenCursor> {
    Lexer::new(source).lex()
}

pub fn parse(source: &str, tokens: TokenCursor) -> ParseResult<ast::Module> {
    Parser::new(source, tokens).parse()
}
