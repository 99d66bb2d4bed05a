//! Wildcard matching for text.
//!
//! This crate matches candidate text against patterns that contain wildcards.
//! Patterns support the following syntax.
//!
//! | Syntax | Description                      |
//! |--------|----------------------------------|
//! | `?`    | Matches exactly one character.   |
//! | `*`    | Matches zero or more characters. |
//! | `\`    | Escapes the following character. |
//!
//! All other characters match themselves and matching is always case sensitive. A
//! pattern matches only if it consumes the entire text: `abc` matches `abc` but not
//! `abcd`, and `*abc` matches only text that ends in `abc`. Escaping strips the
//! wildcard meaning of the escaped character, so the pattern `\*` matches the text
//! `*`. A trailing `\` with nothing left to escape is a literal backslash. Escaping
//! can be disabled with [`flags::NO_ESCAPE`], in which case `\` matches itself like
//! any other literal character.
//!
//! Matching is a single forward scan over both the pattern and the text. Runs of `*`
//! collapse into one and any `?` adjacent to a `*` consumes its mandatory character
//! before the flexible skip, so adversarial patterns like repeated `a*` runs are
//! matched in polynomial time rather than triggering exponential backtracking.
//!
//! # Examples
//!
//! ```rust
//! use wick::flags;
//!
//! assert!(wick::is_match("*.rs", "lib.rs", 0));
//! assert!(wick::is_match("a?c", "abc", 0));
//! assert!(!wick::is_match("*.rs", "lib.md", 0));
//!
//! assert!(wick::is_match(r"\*.rs", "*.rs", 0));
//! assert!(wick::is_match(r"\*.rs", r"\x.rs", flags::NO_ESCAPE));
//! ```

mod fragment;
mod token;

#[cfg(feature = "miette")]
use miette::Diagnostic;
#[cfg(feature = "miette")]
use std::fmt::Display;
use thiserror::Error;

/// Bit flags that alter matching behavior.
///
/// Flags are combined into a bitmask with the `|` operator. A bitmask of zero
/// requests the default behavior.
pub mod flags {
    /// Disables backslash escaping.
    ///
    /// When set, `\` is an ordinary literal character and no character loses its
    /// wildcard meaning.
    pub const NO_ESCAPE: u8 = 1 << 0;
}

/// Describes failures of the [`matched`] operation.
///
/// [`matched`]: crate::matched
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MatchError {
    /// The pattern or the text is absent.
    ///
    /// This is a precondition violation and is never caused by the content of the
    /// pattern or the text.
    #[error("pattern or text is absent")]
    InvalidArgument,
    /// The text does not match the pattern.
    ///
    /// This is an ordinary negative outcome rather than an exceptional condition:
    /// callers that probe many candidates observe it routinely.
    #[error("text does not match pattern")]
    NoMatch,
}

#[cfg(feature = "miette")]
impl Diagnostic for MatchError {
    fn code<'a>(&'a self) -> Option<Box<dyn 'a + Display>> {
        Some(Box::new(match self {
            MatchError::InvalidArgument => "wick::matched::argument",
            MatchError::NoMatch => "wick::matched::nomatch",
        }))
    }
}

/// Matches text against a wildcard pattern.
///
/// The outcome distinguishes absent inputs from a failure to match: an absent
/// `pattern` or `text` is a precondition violation regardless of the other
/// argument, while [`NoMatch`] reports that both inputs are present but the text
/// does not match the pattern. Matching is pure and retains no state between
/// calls, so the same inputs always produce the same outcome.
///
/// # Examples
///
/// ```rust
/// use wick::MatchError;
///
/// assert_eq!(wick::matched(Some("a*c"), Some("abbc"), 0), Ok(()));
/// assert_eq!(
///     wick::matched(Some("a*c"), Some("abcd"), 0),
///     Err(MatchError::NoMatch),
/// );
/// assert_eq!(
///     wick::matched(None, Some("abc"), 0),
///     Err(MatchError::InvalidArgument),
/// );
/// ```
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `pattern` or `text` is `None` and [`NoMatch`] if
/// the text does not match the pattern.
///
/// [`InvalidArgument`]: crate::MatchError::InvalidArgument
/// [`NoMatch`]: crate::MatchError::NoMatch
pub fn matched(pattern: Option<&str>, text: Option<&str>, flags: u8) -> Result<(), MatchError> {
    let (Some(pattern), Some(text)) = (pattern, text) else {
        return Err(MatchError::InvalidArgument);
    };
    let escape = (flags & self::flags::NO_ESCAPE) == 0;
    if fragment::matched(&token::scan(pattern, escape), text) {
        Ok(())
    }
    else {
        Err(MatchError::NoMatch)
    }
}

/// Returns `true` if the text matches the wildcard pattern.
///
/// This predicate is equivalent to [`matched`] with both arguments present and is
/// more ergonomic when probing many candidates.
///
/// # Examples
///
/// ```rust
/// let names = ["capture.rs", "lib.rs", "walk.md"];
/// assert_eq!(
///     names
///         .into_iter()
///         .filter(|name| wick::is_match("*.rs", name, 0))
///         .count(),
///     2,
/// );
/// ```
///
/// [`matched`]: crate::matched
pub fn is_match(pattern: &str, text: &str, flags: u8) -> bool {
    matched(Some(pattern), Some(text), flags).is_ok()
}

/// Escapes wildcard metacharacters in text.
///
/// The output is a pattern that matches the input text literally: `*`, `?`, and `\`
/// are each preceded by `\`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(wick::escape("file*.rs"), r"file\*.rs");
/// assert!(wick::is_match(&wick::escape("file*.rs"), "file*.rs", 0));
/// ```
pub fn escape(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len());
    for point in text.chars() {
        if matches!(point, '*' | '?' | '\\') {
            pattern.push('\\');
        }
        pattern.push(point);
    }
    pattern
}
