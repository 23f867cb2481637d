//! Separators used by the expression grammars.
//!
//! A separator is either a literal string or a compiled regular expression.
//! Patterns are compiled once, when a strategy is constructed, and never
//! again while parsing.
//!
//! Splitting follows the conventions query-string users expect from other
//! web stacks:
//!
//! - an empty input yields no pieces
//! - trailing empty pieces are dropped (`"a,b,"` → `["a", "b"]`)
//! - leading and inner empty pieces are kept (`",a"` → `["", "a"]`)
//! - an empty separator never splits

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::errors::QueryError;

/// `,` followed by any amount of whitespace.
pub const COMMA_PATTERN: &str = r",\s*";

static COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMA_PATTERN).expect("comma pattern is valid"));

/// Literal or pattern separator.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "SeparatorRepr")]
pub enum Separator {
    Literal(String),
    Pattern(Regex),
}

/// Configuration form: `","` or `{ "pattern": ",\\s*" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeparatorRepr {
    Literal(String),
    Pattern { pattern: String },
}

impl TryFrom<SeparatorRepr> for Separator {
    type Error = QueryError;

    fn try_from(repr: SeparatorRepr) -> Result<Self, Self::Error> {
        match repr {
            SeparatorRepr::Literal(literal) => Ok(Self::Literal(literal)),
            SeparatorRepr::Pattern { pattern } => Self::pattern(&pattern).inspect_err(|err| {
                tracing::warn!(pattern = %pattern, error = %err, "Rejected separator pattern");
            }),
        }
    }
}

impl Separator {
    pub fn literal(separator: impl Into<String>) -> Self {
        Self::Literal(separator.into())
    }

    /// Compile a pattern separator.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPattern`] if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, QueryError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|err| QueryError::invalid_pattern(pattern, &err))
    }

    /// The built-in `,\s*` pattern.
    #[must_use]
    pub fn comma() -> Self {
        Self::Pattern(COMMA.clone())
    }

    /// True for an empty literal, which disables splitting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Literal(literal) => literal.is_empty(),
            Self::Pattern(regex) => regex.as_str().is_empty(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(literal) => literal,
            Self::Pattern(regex) => regex.as_str(),
        }
    }

    /// Split `input` on every occurrence of the separator.
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        if input.is_empty() {
            return Vec::new();
        }
        if self.is_empty() {
            return vec![input];
        }

        let mut pieces: Vec<&str> = match self {
            Self::Literal(literal) => input.split(literal.as_str()).collect(),
            Self::Pattern(regex) => regex.split(input).collect(),
        };
        while pieces.last().is_some_and(|piece| piece.is_empty()) {
            pieces.pop();
        }
        pieces
    }

    /// Split `input` on the first occurrence only.
    ///
    /// Without a match the whole input is returned with no remainder;
    /// a match at the very end returns an empty remainder.
    #[must_use]
    pub fn split_once<'a>(&self, input: &'a str) -> (&'a str, Option<&'a str>) {
        if self.is_empty() {
            return (input, None);
        }

        match self {
            Self::Literal(literal) => input
                .split_once(literal.as_str())
                .map_or((input, None), |(head, tail)| (head, Some(tail))),
            Self::Pattern(regex) => regex
                .find(input)
                .map_or((input, None), |m| (&input[..m.start()], Some(&input[m.end()..]))),
        }
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Separator {
    fn from(literal: &str) -> Self {
        Self::literal(literal)
    }
}

impl From<Regex> for Separator {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}
