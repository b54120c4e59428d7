//! A named category of words and its slice of the file format.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::word::Word;
use crate::domain::word_list::WordList;

/// A named, ordered, duplicate-permitting collection of words.
///
/// The name is non-empty from construction on; there is no way to obtain
/// a category without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: WordList,
}

impl Category {
    /// Create an empty category with the given name.
    ///
    /// # Errors
    /// `DomainError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            name,
            words: WordList::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the category. Does NOT re-sort any owning catalog: order is
    /// re-established only on add (see Catalog::add_sorted).
    ///
    /// # Errors
    /// `DomainError::EmptyName` if the new name is empty.
    pub fn rename(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        if new_name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        self.name = new_name;
        Ok(())
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut WordList {
        &mut self.words
    }

    /// Render a human-readable block: a header line with the category
    /// name, then the word list at `words_per_line` words per line.
    pub fn render(&self, words_per_line: usize) -> String {
        format!("Category: {}\n{}", self.name, self.words.render(words_per_line))
    }

    /// Independent copy of the words, stable-sorted case-insensitively
    /// (ASCII fold for comparison only; stored case is untouched). Words
    /// that compare equal after folding keep their original relative order.
    pub fn sorted_words(&self) -> Vec<Word> {
        let mut words = self.words.to_vec();
        words.sort_by(|a, b| fold_cmp(a.as_str(), b.as_str()));
        words
    }

    /// The case-insensitive sorted view, one word per line.
    pub fn render_sorted(&self) -> String {
        let mut out = self.sorted_words().iter().join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Serialize this category's block of the file format: a `#name`
    /// line, then one word per line in current list order.
    pub fn to_block(&self) -> String {
        let mut block = format!("#{}\n", self.name);
        for word in self.words.iter() {
            block.push_str(word.as_str());
            block.push('\n');
        }
        block
    }

    /// Scan file content for the block belonging to `name`.
    ///
    /// Returns `None` when no line equals `#name`. Otherwise collects the
    /// lines after the first such marker, verbatim, one word per line,
    /// stopping at the first blank line, the next `#` line, or end of
    /// input.
    ///
    /// # Errors
    /// `DomainError::EmbeddedNewline` cannot occur here (lines carry no
    /// line breaks); word construction is still validated for uniformity.
    pub fn extract_words(content: &str, name: &str) -> DomainResult<Option<Vec<Word>>> {
        let marker = format!("#{name}");
        let mut lines = content.lines().skip_while(|line| *line != marker);
        if lines.next().is_none() {
            return Ok(None);
        }
        let mut words = Vec::new();
        for line in lines {
            if line.is_empty() || line.starts_with('#') {
                break;
            }
            words.push(Word::new(line)?);
        }
        Ok(Some(words))
    }
}

/// Ordering after mapping ASCII letters to lowercase. Used only for the
/// sorted display, never for storage or exact-match lookup.
fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}
