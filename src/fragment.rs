//! Fragment extraction and matching.
//!
//! A fragment is a maximal run of literals and single-character wildcards between
//! zero-or-more wildcards (or pattern boundaries). Matching consumes the pattern one
//! fragment at a time in a single forward pass over both sequences: fragments are
//! anchored at the text cursor unless a `*` precedes them, in which case their
//! leftmost occurrence in the remaining text is taken. Each `*` triggers at most one
//! scan forward, so adversarial patterns like repeated `a*` runs cannot trigger
//! exponential backtracking.

use crate::token::{Token, Wildcard};

/// Matches a token sequence against text.
pub fn matched(tokens: &[Token], text: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    matched_from(tokens, &text)
}

fn matched_from(mut tokens: &[Token], mut text: &[char]) -> bool {
    while let Some(token) = tokens.first() {
        if token.is_zero_or_more() {
            // Collapse the wildcard run: `**` behaves as `*` and `*?` as `?*`, so the
            // single-character wildcards in the run consume text before the flexible
            // skip.
            let mut n = 0usize;
            loop {
                match tokens.split_first() {
                    Some((Token::Wildcard(Wildcard::ZeroOrMore), rest)) => {
                        tokens = rest;
                    },
                    Some((Token::Wildcard(Wildcard::One), rest)) => {
                        n += 1;
                        tokens = rest;
                    },
                    _ => {
                        break;
                    },
                }
            }
            if text.len() < n {
                return false;
            }
            text = &text[n..];

            let (fragment, rest) = split(tokens);
            if !rest.is_empty() {
                // The pattern continues beyond this fragment, so the fragment floats:
                // take its leftmost occurrence in the text.
                match find(text, fragment) {
                    Some(offset) => {
                        text = &text[offset + fragment.len()..];
                    },
                    None => {
                        return false;
                    },
                }
            }
            else if fragment.is_empty() {
                // A trailing `*` consumes any and all remaining text.
                text = &[];
            }
            else {
                // The final fragment must align with the tail of the text, so `*abc`
                // matches only text that ends in `abc`.
                match tail(text, fragment.len()) {
                    Some(tail) if starts_with(tail, fragment) => {
                        text = &[];
                    },
                    _ => {
                        return false;
                    },
                }
            }
            tokens = rest;
        }
        else {
            let (fragment, rest) = split(tokens);
            if !starts_with(text, fragment) {
                return false;
            }
            text = &text[fragment.len()..];
            tokens = rest;
        }
    }
    text.is_empty()
}

/// Splits a token sequence into the fragment at its beginning and the remainder.
///
/// The remainder is empty or begins with a zero-or-more wildcard.
fn split(tokens: &[Token]) -> (&[Token], &[Token]) {
    let offset = tokens
        .iter()
        .position(Token::is_zero_or_more)
        .unwrap_or(tokens.len());
    tokens.split_at(offset)
}

/// Attempts to match a fragment at the beginning of the text.
fn starts_with(text: &[char], fragment: &[Token]) -> bool {
    text.len() >= fragment.len()
        && fragment
            .iter()
            .zip(text)
            .all(|(token, &point)| token.matches(point))
}

/// Finds the leftmost occurrence of a fragment in the text.
fn find(text: &[char], fragment: &[Token]) -> Option<usize> {
    (0..=(text.len().checked_sub(fragment.len())?))
        .find(|&offset| starts_with(&text[offset..], fragment))
}

/// Gets the last `n` characters of the text, or `None` if the text is too short.
fn tail(text: &[char], n: usize) -> Option<&[char]> {
    text.len().checked_sub(n).map(|offset| &text[offset..])
}
