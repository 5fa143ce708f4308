//! Bracket-token content parser using winnow.
//!
//! Splits free-text content into literal runs and `[token]` segments.
//! Parsing is total: an unmatched `[` or an empty `[]` is just literal text,
//! never an error, because content authors write whatever they like.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// A parsed piece of a content string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text copied through untouched.
    Literal(String),
    /// A bracketed token. `raw` is the inner text exactly as written;
    /// `name` is the normalized (trimmed, lowercased) lookup key.
    Token { raw: String, name: String },
}

/// Parse a content string into literal and token segments.
pub fn parse_segments(input: &str) -> Vec<Segment> {
    let mut remaining = input;
    match segments(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => parsed,
        // Unreachable with the grammar below (every char is consumable), but
        // degrading to one literal chunk keeps the function total regardless.
        _ => vec![Segment::Literal(input.to_string())],
    }
}

fn segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let parsed: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(merge_literals(parsed))
}

/// Merge adjacent literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((token, literal_char)).parse_next(input)
}

/// `[inner]` where `inner` is one or more non-`]` characters.
fn token(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', take_while(1.., |c: char| c != ']'), ']')
        .map(|inner: &str| Segment::Token {
            raw: inner.to_string(),
            name: inner.trim().to_lowercase(),
        })
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_literal() {
        assert_eq!(
            parse_segments("hello world"),
            vec![Segment::Literal("hello world".to_string())]
        );
    }

    #[test]
    fn token_is_normalized_but_raw_is_preserved() {
        assert_eq!(
            parse_segments("[ City ]"),
            vec![Segment::Token {
                raw: " City ".to_string(),
                name: "city".to_string(),
            }]
        );
    }

    #[test]
    fn mixed_text_and_tokens() {
        let segments = parse_segments("В [city] с [year]");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], Segment::Literal("В ".to_string()));
        assert!(matches!(&segments[1], Segment::Token { name, .. } if name == "city"));
    }

    #[test]
    fn unmatched_bracket_is_literal() {
        assert_eq!(
            parse_segments("open [bracket"),
            vec![Segment::Literal("open [bracket".to_string())]
        );
    }

    #[test]
    fn empty_brackets_are_literal() {
        assert_eq!(
            parse_segments("a[]b"),
            vec![Segment::Literal("a[]b".to_string())]
        );
    }
}
