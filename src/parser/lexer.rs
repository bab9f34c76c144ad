//! Tokenizer for typed signature text using logos
//!
//! Every character is its own token except bracket groups: `[Numpad9]` names a
//! key by identifier. A `[` with no closing `]` after it is an ordinary character.

use std::fmt;

use logos::{Lexer, Logos};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("[", close_bracket)]
    Bracket,

    #[regex(r"[^\[]")]
    Char,
}

/// Extend a `[` to the next `]` when there is one
fn close_bracket(lex: &mut Lexer<RawToken>) -> bool {
    if let Some(end) = lex.remainder().find(']') {
        lex.bump(end + 1);
    }
    true
}

/// One unit of typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single typed character, case preserved
    Char(char),
    /// A bracketed key identifier, brackets stripped
    Named(&'a str),
}

impl fmt::Display for Token<'_> {
    /// Writes the source text the token was read from
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Char(c) => write!(f, "{}", c),
            Token::Named(id) => write!(f, "[{}]", id),
        }
    }
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> + '_ {
    RawToken::lexer(input)
        .spanned()
        .filter_map(move |(raw, span)| {
            let slice = &input[span.clone()];
            let token = match raw {
                Ok(RawToken::Bracket) if slice.len() > 1 => {
                    Token::Named(&slice[1..slice.len() - 1])
                }
                _ => Token::Char(slice.chars().next()?),
            };
            Some((token, span))
        })
}

/// Split input into tokens, dropping spans
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    lex(input).map(|(t, _)| t).collect()
}
