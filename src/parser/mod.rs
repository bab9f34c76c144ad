//! Parser for typed signature text

pub mod lexer;

pub use lexer::{lex, tokenize, Span, Token};
