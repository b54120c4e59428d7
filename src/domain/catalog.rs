//! Ordered collection of categories keyed by name.

use itertools::Itertools;

use crate::domain::category::Category;
use crate::domain::error::DomainResult;
use crate::domain::word::Word;

/// An ordered collection of categories. The catalog exclusively owns its
/// categories; duplicate names are permitted and name-keyed operations
/// affect every match.
///
/// The name ordering (ascending, case-sensitive) is re-established after
/// every add, not continuously enforced: a rename through `get_mut` can
/// leave the catalog unsorted until the next add or sorted rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a category with the given name, append it, then re-sort the
    /// whole catalog ascending by name. O(n log n) per add, fine for the
    /// small catalogs this tool handles.
    ///
    /// # Errors
    /// `DomainError::EmptyName` if the name is empty.
    pub fn add_sorted(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.categories.push(Category::new(name)?);
        self.sort_by_name();
        Ok(())
    }

    /// Append an already-built category without re-sorting. Used by file
    /// loading, which preserves file order.
    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Remove every category whose name equals `name`. No-op if none match.
    pub fn remove_by_name(&mut self, name: &str) {
        self.categories.retain(|cat| cat.name() != name);
    }

    /// Clear the word list of every category whose name equals `name`,
    /// keeping the categories themselves.
    pub fn clear_by_name(&mut self, name: &str) {
        for cat in self.categories.iter_mut().filter(|c| c.name() == name) {
            cat.words_mut().clear();
        }
    }

    /// First category with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.name() == name)
    }

    /// Positions of every category with the given name, in catalog order.
    pub fn positions_by_name(&self, name: &str) -> Vec<usize> {
        self.categories
            .iter()
            .positions(|cat| cat.name() == name)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Category> {
        self.categories.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Re-sort ascending by name (case-sensitive lexicographic, stable).
    pub fn sort_by_name(&mut self) {
        self.categories
            .sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Every word of every category, flattened category by category (no
    /// interleaving), then sorted with plain lexicographic ordering (not
    /// case-folded).
    pub fn all_words_sorted(&self) -> Vec<Word> {
        self.categories
            .iter()
            .flat_map(|cat| cat.words().iter().cloned())
            .sorted()
            .collect()
    }

    /// Every category's block rendering, in catalog order.
    pub fn render(&self, words_per_line: usize) -> String {
        self.categories
            .iter()
            .map(|cat| cat.render(words_per_line))
            .join("\n")
    }

    /// Re-sort the catalog by name, then render each category's name
    /// followed by its case-insensitive sorted word view.
    pub fn render_all_sorted(&mut self) -> String {
        self.sort_by_name();
        let mut out = String::new();
        for cat in &self.categories {
            out.push_str(cat.name());
            out.push('\n');
            out.push_str(&cat.render_sorted());
        }
        out
    }

    /// Parse file content into categories in one top-to-bottom pass.
    ///
    /// Every line starting with `#` begins a new block; the remainder of
    /// that line (no trimming) is the category name. Word lines accumulate
    /// into the current block. A blank line ends the current block; later
    /// word lines before the next `#` line are ignored, as are lines
    /// before the first block.
    ///
    /// # Errors
    /// `DomainError::EmptyName` for a `#` line with nothing after the
    /// marker.
    pub fn parse(content: &str) -> DomainResult<Vec<Category>> {
        let mut categories = Vec::new();
        let mut current: Option<Category> = None;
        for line in content.lines() {
            if let Some(name) = line.strip_prefix('#') {
                categories.extend(current.take());
                current = Some(Category::new(name)?);
            } else if line.is_empty() {
                categories.extend(current.take());
            } else if let Some(cat) = current.as_mut() {
                cat.words_mut().push_back(Word::new(line)?);
            }
        }
        categories.extend(current);
        Ok(categories)
    }
}
