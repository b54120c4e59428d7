//! Interactive menu session
//!
//! The menu loop holds no process-wide state: everything lives in an
//! explicit `Session` passed by reference into each handler. The session
//! is generic over its reader and writer so the loops can be driven from
//! scripted input in tests.
//!
//! Two nested loops mirror the two levels of the data model: the catalog
//! menu operates on categories, the category menu (entered via option 5)
//! operates on the words of one category. Batch entry (adding categories,
//! appending words) repeats until the literal sentinel `exit`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::application::StorageService;
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::domain::{Catalog, Word};

/// Input that terminates batch entry of categories and words.
const SENTINEL: &str = "exit";

/// One interactive session over a catalog.
pub struct Session<R: BufRead, W: Write> {
    catalog: Catalog,
    storage: StorageService,
    settings: Settings,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(storage: StorageService, settings: Settings, input: R, out: W) -> Self {
        Self {
            catalog: Catalog::new(),
            storage,
            settings,
            input,
            out,
        }
    }

    /// The catalog the session operates on. Exposed for tests.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the catalog menu loop until `0` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.write_catalog_menu()?;
            let Some(choice) = self.prompt_line("Select an option: ")? else {
                break;
            };
            match choice.trim() {
                "0" => {
                    writeln!(self.out, "Goodbye.")?;
                    break;
                }
                option => self.handle_catalog_option(option)?,
            }
        }
        Ok(())
    }

    fn write_catalog_menu(&mut self) -> CliResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "========= Catalog Menu =========")?;
        writeln!(self.out, "1. Print all categories")?;
        writeln!(self.out, "2. Add new categories (sorted)")?;
        writeln!(self.out, "3. Remove a category")?;
        writeln!(self.out, "4. Clear a category")?;
        writeln!(self.out, "5. Open a category")?;
        writeln!(self.out, "6. Show all words (sorted)")?;
        writeln!(self.out, "7. Show all categories (sorted individually)")?;
        writeln!(self.out, "8. Load from file")?;
        writeln!(self.out, "9. Save to file")?;
        writeln!(self.out, "0. Exit")?;
        Ok(())
    }

    fn handle_catalog_option(&mut self, option: &str) -> CliResult<()> {
        debug!("catalog option: {option}");
        match option {
            "1" => {
                if self.catalog.is_empty() {
                    writeln!(self.out, "No categories.")?;
                } else {
                    let text = self.catalog.render(self.settings.words_per_line);
                    writeln!(self.out, "{text}")?;
                }
            }
            "2" => loop {
                let Some(name) = self.prompt_line("New category name (exit to finish): ")? else {
                    break;
                };
                if name == SENTINEL {
                    break;
                }
                if let Err(e) = self.catalog.add_sorted(name) {
                    self.report(&e)?;
                }
            },
            "3" => {
                if let Some(name) = self.prompt_line("Category name to remove: ")? {
                    self.catalog.remove_by_name(&name);
                }
            }
            "4" => {
                if let Some(name) = self.prompt_line("Category name to clear: ")? {
                    self.catalog.clear_by_name(&name);
                }
            }
            "5" => {
                let Some(name) = self.prompt_line("Category name to open: ")? else {
                    return Ok(());
                };
                let positions = self.catalog.positions_by_name(&name);
                if positions.is_empty() {
                    writeln!(self.out, "No such category: {name}")?;
                }
                // Duplicate names all match; each gets its own menu round.
                for index in positions {
                    self.run_category(index)?;
                }
            }
            "6" => {
                for word in self.catalog.all_words_sorted() {
                    writeln!(self.out, "{word}")?;
                }
            }
            "7" => {
                let text = self.catalog.render_all_sorted();
                write!(self.out, "{text}")?;
            }
            "8" => {
                let Some(path) = self.prompt_path("Load from file: ")? else {
                    return Ok(());
                };
                let storage = &self.storage;
                if let Err(e) = storage.load_catalog(&mut self.catalog, &path) {
                    self.report(&e)?;
                }
            }
            "9" => {
                let Some(path) = self.prompt_path("Save to file: ")? else {
                    return Ok(());
                };
                match self.storage.save_catalog(&self.catalog, &path) {
                    Ok(()) => writeln!(
                        self.out,
                        "Saved {} categories to {}",
                        self.catalog.len(),
                        path.display()
                    )?,
                    Err(e) => self.report(&e)?,
                }
            }
            _ => writeln!(self.out, "Invalid option. Please try again.")?,
        }
        Ok(())
    }

    /// Run the category menu loop for the category at `index` until `0`
    /// or end of input.
    fn run_category(&mut self, index: usize) -> CliResult<()> {
        loop {
            self.write_category_menu(index)?;
            let Some(choice) = self.prompt_line("Select an option: ")? else {
                break;
            };
            match choice.trim() {
                "0" => {
                    writeln!(self.out, "Closing category.")?;
                    break;
                }
                option => self.handle_category_option(index, option)?,
            }
        }
        Ok(())
    }

    fn write_category_menu(&mut self, index: usize) -> CliResult<()> {
        let name = match self.catalog.get(index) {
            Some(cat) => cat.name().to_string(),
            None => return Ok(()),
        };
        writeln!(self.out)?;
        writeln!(self.out, "========= Category: {name} =========")?;
        writeln!(self.out, "1. Print words")?;
        writeln!(self.out, "2. Append words")?;
        writeln!(self.out, "3. Remove a word")?;
        writeln!(self.out, "4. Clear words")?;
        writeln!(self.out, "5. Rename category")?;
        writeln!(self.out, "6. Search for a word")?;
        writeln!(self.out, "7. Show sorted words")?;
        writeln!(self.out, "8. Load category from file")?;
        writeln!(self.out, "9. Save category to file")?;
        writeln!(self.out, "0. Back")?;
        Ok(())
    }

    fn handle_category_option(&mut self, index: usize, option: &str) -> CliResult<()> {
        debug!("category option: {option}");
        match option {
            "1" => {
                let text = match self.catalog.get(index) {
                    Some(cat) if cat.words().is_empty() => None,
                    Some(cat) => Some(cat.render(self.settings.words_per_line)),
                    None => return Ok(()),
                };
                match text {
                    Some(text) => writeln!(self.out, "{text}")?,
                    None => writeln!(self.out, "No words in category.")?,
                }
            }
            "2" => loop {
                let Some(line) = self.prompt_line("Word to append (exit to finish): ")? else {
                    break;
                };
                if line == SENTINEL {
                    break;
                }
                match Word::new(line) {
                    Ok(word) => {
                        if let Some(cat) = self.catalog.get_mut(index) {
                            cat.words_mut().push_back(word);
                        }
                    }
                    Err(e) => self.report(&e)?,
                }
            },
            "3" => {
                let Some(line) = self.prompt_line("Word to remove: ")? else {
                    return Ok(());
                };
                match Word::new(line) {
                    Ok(word) => {
                        if let Some(cat) = self.catalog.get_mut(index) {
                            cat.words_mut().remove(&word);
                        }
                    }
                    Err(e) => self.report(&e)?,
                }
            }
            "4" => {
                if let Some(cat) = self.catalog.get_mut(index) {
                    cat.words_mut().clear();
                }
            }
            "5" => {
                let Some(name) = self.prompt_line("New category name: ")? else {
                    return Ok(());
                };
                // Renaming deliberately does not re-sort the catalog;
                // order is re-established on the next add.
                let result = match self.catalog.get_mut(index) {
                    Some(cat) => cat.rename(name),
                    None => return Ok(()),
                };
                if let Err(e) = result {
                    self.report(&e)?;
                }
            }
            "6" => {
                let Some(line) = self.prompt_line("Word to search: ")? else {
                    return Ok(());
                };
                match Word::new(line) {
                    Ok(word) => {
                        let found = self
                            .catalog
                            .get(index)
                            .is_some_and(|cat| cat.words().lookup(&word));
                        if found {
                            writeln!(self.out, "Word found in category.")?;
                        } else {
                            writeln!(self.out, "Word not found in category.")?;
                        }
                    }
                    Err(e) => self.report(&e)?,
                }
            }
            "7" => {
                let text = match self.catalog.get(index) {
                    Some(cat) => cat.render_sorted(),
                    None => return Ok(()),
                };
                write!(self.out, "{text}")?;
            }
            "8" => {
                let Some(path) = self.prompt_path("Load category from file: ")? else {
                    return Ok(());
                };
                let storage = &self.storage;
                let result = match self.catalog.get_mut(index) {
                    Some(cat) => storage.load_category(cat, &path),
                    None => return Ok(()),
                };
                if let Err(e) = result {
                    self.report(&e)?;
                }
            }
            "9" => {
                let Some(path) = self.prompt_path("Save category to file: ")? else {
                    return Ok(());
                };
                let result = match self.catalog.get(index) {
                    Some(cat) => self.storage.save_category(cat, &path),
                    None => return Ok(()),
                };
                if let Err(e) = result {
                    self.report(&e)?;
                }
            }
            _ => writeln!(self.out, "Invalid option. Please try again.")?,
        }
        Ok(())
    }

    /// Prompt and read one line. Returns `None` at end of input. The line
    /// keeps interior whitespace (words may contain spaces); only the
    /// trailing line break is stripped.
    fn prompt_line(&mut self, msg: &str) -> CliResult<Option<String>> {
        write!(self.out, "{msg}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for a filename; an empty answer falls back to the configured
    /// data file. Returns `None` at end of input or when neither is given.
    fn prompt_path(&mut self, msg: &str) -> CliResult<Option<PathBuf>> {
        let Some(entered) = self.prompt_line(msg)? else {
            return Ok(None);
        };
        if !entered.is_empty() {
            return Ok(Some(PathBuf::from(entered)));
        }
        match &self.settings.data_file {
            Some(path) => Ok(Some(path.clone())),
            None => {
                writeln!(self.out, "No filename given and no data_file configured.")?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
        writeln!(self.out, "error: {err}")?;
        Ok(())
    }
}
