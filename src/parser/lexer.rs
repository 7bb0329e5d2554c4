//! Lexer for route templates using logos
//!
//! Every character of the input falls into exactly one token class, so the
//! lexer never has to backtrack and never produces an error token.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Delimiters
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,

    // A run of dots; only a run of exactly three marks a catch-all
    #[regex(r"\.+", |lex| lex.slice().len())]
    Dots(usize),

    // Placeholder names are ASCII letters, digits and underscore
    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice().to_string())]
    Name(String),

    // Anything else: slashes, dashes, spaces, non-ASCII text
    #[regex(r"[^\[\]A-Za-z0-9_.]+")]
    Text,
}

/// Lex a template into tokens with their byte spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
