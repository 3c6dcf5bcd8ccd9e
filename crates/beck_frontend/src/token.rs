use beck_session::span::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The slice of source text this token was lexed from.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.start..self.span.end]
    }
}

impl PartialEq<TokenKind> for Token {
    fn eq(&self, kind: &TokenKind) -> bool {
        self.kind == *kind
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Def,
    End,
    Identifier,
    Integer,
    OParen,
    CParen,
    Comma,
    Addition,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Def => "keyword `def`",
            TokenKind::End => "keyword `end`",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::OParen => "`(`",
            TokenKind::CParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Addition => "`+`",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.token_name())
    }
}

/// One row of the lexical table: a token kind and the pattern that produces
/// it.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule {
    pub kind: TokenKind,
    pub pattern: Pattern,
}

/// The lexical grammar. Rows are tried in order and the first match anchored
/// at the cursor wins, so table order is the only disambiguation: the keyword
/// rows must come before `Identifier` or keywords would lex as identifiers.
pub const TOKEN_TABLE: [TokenRule; 8] = [
    TokenRule {
        kind: TokenKind::Def,
        pattern: Pattern::Keyword("def"),
    },
    TokenRule {
        kind: TokenKind::End,
        pattern: Pattern::Keyword("end"),
    },
    TokenRule {
        kind: TokenKind::Identifier,
        pattern: Pattern::Letters,
    },
    TokenRule {
        kind: TokenKind::Integer,
        pattern: Pattern::Digits,
    },
    TokenRule {
        kind: TokenKind::OParen,
        pattern: Pattern::Symbol('('),
    },
    TokenRule {
        kind: TokenKind::CParen,
        pattern: Pattern::Symbol(')'),
    },
    TokenRule {
        kind: TokenKind::Comma,
        pattern: Pattern::Symbol(','),
    },
    TokenRule {
        kind: TokenKind::Addition,
        pattern: Pattern::Symbol('+'),
    },
];

#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// An exact word followed by a word boundary.
    Keyword(&'static str),
    /// A run of ASCII letters followed by a word boundary.
    Letters,
    /// A run of ASCII digits followed by a word boundary.
    Digits,
    /// A single punctuation character.
    Symbol(char),
}

impl Pattern {
    /// Length of the match anchored at the start of `rest`, if any.
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        match *self {
            Pattern::Keyword(word) => {
                (rest.starts_with(word) && !word_char_at(rest, word.len())).then_some(word.len())
            }
            Pattern::Letters => match_run(rest, |ch| ch.is_ascii_alphabetic()),
            Pattern::Digits => match_run(rest, |ch| ch.is_ascii_digit()),
            Pattern::Symbol(symbol) => rest.starts_with(symbol).then(|| symbol.len_utf8()),
        }
    }
}

fn match_run(rest: &str, class: impl Fn(char) -> bool) -> Option<usize> {
    let len: usize = rest
        .chars()
        .take_while(|&ch| class(ch))
        .map(char::len_utf8)
        .sum();

    (len > 0 && !word_char_at(rest, len)).then_some(len)
}

fn word_char_at(rest: &str, at: usize) -> bool {
    rest[at..]
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
