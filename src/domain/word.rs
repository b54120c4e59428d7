//! A single word token.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};

/// A single word: a validated wrapper over its text.
///
/// The persistence format is line-oriented, so a word must not contain a
/// line break. Ordering and equality delegate to the underlying text
/// (plain lexicographic, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Create a word from text.
    ///
    /// # Errors
    /// `DomainError::EmbeddedNewline` if the text contains `\n` or `\r`.
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        if text.contains(['\n', '\r']) {
            return Err(DomainError::EmbeddedNewline(text));
        }
        Ok(Self(text))
    }

    /// The word's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, consistent with the lexicographic ordering.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at position `n`.
    ///
    /// # Errors
    /// `DomainError::IndexOutOfRange` when `n` is past the last character.
    pub fn char_at(&self, n: usize) -> DomainResult<char> {
        self.0
            .chars()
            .nth(n)
            .ok_or_else(|| DomainError::IndexOutOfRange {
                index: n,
                len: self.0.chars().count(),
            })
    }

    /// Concatenate with another word using the given delimiter,
    /// producing a new word. Both inputs are left untouched.
    pub fn concat(&self, other: &Word, delimiter: &str) -> Word {
        Word(format!("{}{}{}", self.0, delimiter, other.0))
    }

    /// Concatenate with the default single-space delimiter.
    pub fn concat_spaced(&self, other: &Word) -> Word {
        self.concat(other, " ")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = DomainError;

    /// Extract one whitespace-delimited token: leading whitespace is
    /// skipped, the token ends at the next whitespace or end of input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .next()
            .map(|token| Word(token.to_string()))
            .ok_or(DomainError::EmptyInput)
    }
}
