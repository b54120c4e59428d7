//! Catalog persistence service
//!
//! Handles saving and loading categories against the line-oriented block
//! format. Saves always append and never truncate; loads never clear
//! in-memory state first. Both contracts mean repeated calls accumulate
//! duplicates — that is the documented behavior, not an accident.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Catalog, Category};
use crate::infrastructure::traits::FileSystem;

/// Service for persisting catalogs and single categories.
pub struct StorageService {
    fs: Arc<dyn FileSystem>,
}

impl StorageService {
    /// Create a new storage service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Append one category's block to the file.
    ///
    /// The file is created if absent and never truncated: saving the same
    /// category twice leaves two blocks in the file. Not transactional —
    /// a failure mid-write can leave a partial block.
    pub fn save_category(&self, category: &Category, path: &Path) -> ApplicationResult<()> {
        debug!(
            "save_category: name={}, path={}",
            category.name(),
            path.display()
        );
        self.fs
            .append(path, &category.to_block())
            .map_err(|e| ApplicationError::FileOpen {
                path: path.to_path_buf(),
                source: e,
            })
    }

    /// Load this category's words from the file.
    ///
    /// Scans for the first line equal to `#` + the category's name and
    /// APPENDS the block's words to the existing list — loading twice
    /// accumulates duplicates. On any error the list is left unchanged.
    ///
    /// # Errors
    /// `FileOpen` when the file cannot be read, `CategoryNotFound` when no
    /// block carries this category's name.
    pub fn load_category(&self, category: &mut Category, path: &Path) -> ApplicationResult<()> {
        debug!(
            "load_category: name={}, path={}",
            category.name(),
            path.display()
        );
        let content = self.read(path)?;
        let words = Category::extract_words(&content, category.name())?.ok_or_else(|| {
            ApplicationError::CategoryNotFound {
                name: category.name().to_string(),
                path: path.to_path_buf(),
            }
        })?;
        debug!("load_category: {} words found", words.len());
        for word in words {
            category.words_mut().push_back(word);
        }
        Ok(())
    }

    /// Append every category's block to the file, in catalog order.
    ///
    /// Not atomic across categories: a failure partway leaves the blocks
    /// written so far in place.
    pub fn save_catalog(&self, catalog: &Catalog, path: &Path) -> ApplicationResult<()> {
        debug!(
            "save_catalog: {} categories, path={}",
            catalog.len(),
            path.display()
        );
        for category in catalog.iter() {
            self.save_category(category, path)?;
        }
        Ok(())
    }

    /// Parse every block of the file in a single pass and append the
    /// resulting categories to the catalog.
    ///
    /// File order is preserved and the catalog is not re-sorted; existing
    /// in-memory categories are kept, so repeated loads accumulate.
    pub fn load_catalog(&self, catalog: &mut Catalog, path: &Path) -> ApplicationResult<()> {
        debug!("load_catalog: path={}", path.display());
        let content = self.read(path)?;
        let categories = Catalog::parse(&content)?;
        debug!("load_catalog: {} categories found", categories.len());
        for category in categories {
            catalog.push(category);
        }
        Ok(())
    }

    fn read(&self, path: &Path) -> ApplicationResult<String> {
        self.fs
            .read_to_string(path)
            .map_err(|e| ApplicationError::FileOpen {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
