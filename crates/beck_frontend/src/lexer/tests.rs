use super::{LexError, LexErrorKind, Lexer};
use crate::token::TokenKind::{self, *};

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    let cursor = Lexer::new(source).lex().unwrap();
    cursor.map(|token| token.kind).collect()
}

fn lex_texts(source: &str) -> Vec<(TokenKind, String)> {
    let cursor = Lexer::new(source).lex().unwrap();
    cursor
        .map(|token| (token.kind, token.text(source).to_owned()))
        .collect()
}

fn lex_err(source: &str) -> LexError {
    Lexer::new(source).lex().unwrap_err()
}

#[test]
fn empty_source() {
    assert!(lex_kinds("").is_empty());
    assert!(lex_kinds("  \n\t ").is_empty());
}

#[test]
fn single_definition() {
    assert_eq!(
        lex_kinds("def f(x) x end"),
        [Def, Identifier, OParen, Identifier, CParen, Identifier, End]
    );
}

#[test]
fn keywords_lex_as_keywords() {
    // Table order puts the keyword rows first, so an exact keyword never
    // lexes as an identifier.
    assert_eq!(lex_kinds("def"), [Def]);
    assert_eq!(lex_kinds("end"), [End]);
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(
        lex_texts("define ender"),
        [
            (Identifier, "define".to_owned()),
            (Identifier, "ender".to_owned()),
        ]
    );
}

#[test]
fn punctuation_and_addition() {
    assert_eq!(lex_kinds("(),+"), [OParen, CParen, Comma, Addition]);
}

#[test]
fn integers() {
    assert_eq!(
        lex_texts("0 42 9001"),
        [
            (Integer, "0".to_owned()),
            (Integer, "42".to_owned()),
            (Integer, "9001".to_owned()),
        ]
    );
}

#[test]
fn addition_chain() {
    assert_eq!(
        lex_kinds("x+y + z"),
        [Identifier, Addition, Identifier, Addition, Identifier]
    );
}

#[test]
fn spacing_is_incidental() {
    // Equivalent programs lex to the same kind sequence regardless of
    // whitespace.
    assert_eq!(lex_kinds("def f(x) x end"), lex_kinds("def f (x)\n\tx\nend"));
    assert_eq!(lex_kinds("x+y"), lex_kinds("x + y"));
}

#[test]
fn unrecognized_input() {
    let err = lex_err("def f(x) x end ?");
    assert!(matches!(err.kind, LexErrorKind::UnrecognizedInput('?')));
    assert_eq!(err.span.start, 15);
    assert_eq!(err.span.end, 16);
}

#[test]
fn letters_require_a_word_boundary() {
    // `abc1` matches neither the identifier row nor the integer row, as in a
    // regex with `\b` on both sides.
    let err = lex_err("abc1");
    assert!(matches!(err.kind, LexErrorKind::UnrecognizedInput('a')));
    assert_eq!(err.span.start, 0);
}

#[test]
fn underscore_is_a_word_character() {
    assert!(matches!(
        lex_err("abc_").kind,
        LexErrorKind::UnrecognizedInput('a')
    ));
}
