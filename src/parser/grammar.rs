//! Template grammar using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::{lex, Token};

/// Parse a route template into literal and placeholder segments
///
/// Parsing never fails: the grammar accepts every token stream, since any
/// token that does not start a well-shaped placeholder is kept as literal
/// text. The resolver reports leftover brackets later.
pub fn parse(input: &str) -> RouteTemplate {
    let len = input.len();

    let token_iter = lex(input).map(|(tok, span)| (tok, span.into()));
    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    let placeholders = template_parser()
        .parse(token_stream)
        .into_result()
        .unwrap_or_default();

    build_segments(input, placeholders)
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn template_parser<'a, I>(
) -> impl Parser<'a, I, Vec<Spanned<Placeholder>>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    };

    // Exactly three dots directly after the opening bracket
    let variadic = select! {
        Token::Dots(3) => (),
    };

    let placeholder = just(Token::BracketOpen)
        .ignore_then(variadic.or_not())
        .then(name)
        .then_ignore(just(Token::BracketClose))
        .map_with(|(dots, name), e| {
            let kind = if dots.is_some() {
                PlaceholderKind::CatchAll
            } else {
                PlaceholderKind::Single
            };
            Some(Spanned::new(Placeholder { name, kind }, span_range(&e.span())))
        });

    // Any token that does not start a placeholder is literal text
    let literal = any().to(None);

    choice((placeholder, literal))
        .repeated()
        .collect::<Vec<Option<Spanned<Placeholder>>>>()
        .map(|pieces| pieces.into_iter().flatten().collect())
}

/// Interleave placeholders with the literal source text between them
fn build_segments(input: &str, placeholders: Vec<Spanned<Placeholder>>) -> RouteTemplate {
    let mut segments = Vec::with_capacity(placeholders.len() * 2 + 1);
    let mut cursor = 0;

    for p in placeholders {
        if p.span.start > cursor {
            segments.push(literal(input, cursor..p.span.start));
        }
        cursor = p.span.end;
        segments.push(Spanned::new(Segment::Placeholder(p.node), p.span));
    }

    if cursor < input.len() {
        segments.push(literal(input, cursor..input.len()));
    }

    RouteTemplate {
        source: input.to_string(),
        segments,
    }
}

fn literal(input: &str, span: std::ops::Range<usize>) -> Spanned<Segment> {
    let text = input.get(span.clone()).unwrap_or("").to_string();
    Spanned::new(Segment::Literal(text), span)
}
