//! Pattern tokenization.
//!
//! Scanning rewrites a pattern string into a transient sequence of tokens in which
//! escape sequences have already collapsed: the pair `\c` becomes the single literal
//! `c` for any character `c`, so downstream matching need not consider escapes at all
//! and the matched length of a token run is simply its count.

/// A wildcard in a pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Wildcard {
    /// Matches exactly one character (`?`).
    One,
    /// Matches zero or more characters (`*`).
    ZeroOrMore,
}

/// A unit of a scanned pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    Literal(char),
    Wildcard(Wildcard),
}

impl Token {
    pub fn is_zero_or_more(&self) -> bool {
        matches!(self, Token::Wildcard(Wildcard::ZeroOrMore))
    }

    /// Matches the token against a single character.
    ///
    /// Zero-or-more wildcards delimit fragments and match no single character.
    pub fn matches(&self, point: char) -> bool {
        match self {
            Token::Literal(literal) => *literal == point,
            Token::Wildcard(Wildcard::One) => true,
            Token::Wildcard(Wildcard::ZeroOrMore) => false,
        }
    }
}

impl From<char> for Token {
    fn from(literal: char) -> Self {
        Token::Literal(literal)
    }
}

impl From<Wildcard> for Token {
    fn from(wildcard: Wildcard) -> Self {
        Token::Wildcard(wildcard)
    }
}

/// Scans a pattern into a token sequence.
///
/// Scanning is infallible: any string is a valid pattern. When `escape` is enabled,
/// `\` strips the wildcard meaning of the character that follows it and a trailing
/// `\` with nothing left to escape is a literal backslash. When `escape` is
/// disabled, `\` is an ordinary literal character.
pub fn scan(expression: &str, escape: bool) -> Vec<Token> {
    use nom::character::complete as character;
    use nom::{branch, combinator, multi, sequence, IResult};

    fn wildcard(input: &str) -> IResult<&str, Token> {
        branch::alt((
            combinator::value(Token::Wildcard(Wildcard::ZeroOrMore), character::char('*')),
            combinator::value(Token::Wildcard(Wildcard::One), character::char('?')),
        ))(input)
    }

    fn escaped(input: &str) -> IResult<&str, Token> {
        combinator::map(
            sequence::preceded(character::char('\\'), character::anychar),
            Token::Literal,
        )(input)
    }

    fn literal(input: &str) -> IResult<&str, Token> {
        combinator::map(character::anychar, Token::Literal)(input)
    }

    let token = |input| {
        if escape {
            branch::alt((wildcard, escaped, literal))(input)
        }
        else {
            branch::alt((wildcard, literal))(input)
        }
    };
    match multi::many0(token)(expression) {
        Ok((_, tokens)) => tokens,
        // `anychar` accepts any remaining character, so the scan cannot fail.
        Err(_) => unreachable!("unexpected scan error"),
    }
}
