//! Tests for StorageService persistence contracts

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use lexicat::application::{ApplicationError, StorageService};
use lexicat::domain::{Catalog, Category, Word};
use lexicat::infrastructure::RealFileSystem;
use lexicat::util::testing;

fn service() -> StorageService {
    testing::init_test_setup();
    StorageService::new(Arc::new(RealFileSystem))
}

fn category_with(name: &str, words: &[&str]) -> Category {
    let mut cat = Category::new(name).unwrap();
    for text in words {
        cat.words_mut().push_back(Word::new(*text).unwrap());
    }
    cat
}

fn data_path(temp: &TempDir) -> PathBuf {
    temp.path().join("words.txt")
}

#[test]
fn given_saved_category_when_loading_fresh_one_then_exact_round_trip() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    let service = service();
    let original = category_with("Mixed", &["b", "A", "c"]);
    service.save_category(&original, &path).unwrap();

    // Act
    let mut fresh = Category::new("Mixed").unwrap();
    service.load_category(&mut fresh, &path).unwrap();

    // Assert - same words, same order
    let texts: Vec<&str> = fresh.words().iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, vec!["b", "A", "c"]);
}

#[test]
fn given_two_saves_when_reading_file_then_two_blocks_accumulated() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    let service = service();
    let cat = category_with("Fruits", &["apple"]);

    // Act - saves append, never truncate
    service.save_category(&cat, &path).unwrap();
    service.save_category(&cat, &path).unwrap();

    // Assert
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "#Fruits\napple\n#Fruits\napple\n");
}

#[test]
fn given_two_loads_when_loading_same_category_then_words_accumulate() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    std::fs::write(&path, "#Fruits\napple\n").unwrap();
    let service = service();
    let mut cat = Category::new("Fruits").unwrap();

    // Act - loads never clear first
    service.load_category(&mut cat, &path).unwrap();
    service.load_category(&mut cat, &path).unwrap();

    // Assert
    let texts: Vec<&str> = cat.words().iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, vec!["apple", "apple"]);
}

#[test]
fn given_absent_category_when_loading_then_not_found_and_unchanged() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    std::fs::write(&path, "#Fruits\napple\n").unwrap();
    let service = service();
    let mut cat = category_with("Colors", &["red"]);

    // Act
    let result = service.load_category(&mut cat, &path);

    // Assert - reported, in-memory state untouched
    assert!(matches!(
        result,
        Err(ApplicationError::CategoryNotFound { .. })
    ));
    assert_eq!(cat.words().len(), 1);
}

#[test]
fn given_missing_file_when_loading_then_file_open_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.txt");
    let service = service();
    let mut cat = Category::new("Fruits").unwrap();

    let result = service.load_category(&mut cat, &path);

    assert!(matches!(result, Err(ApplicationError::FileOpen { .. })));
    assert!(cat.words().is_empty());
}

#[test]
fn given_directory_as_target_when_saving_then_file_open_error() {
    let temp = TempDir::new().unwrap();
    let service = service();
    let cat = category_with("Fruits", &["apple"]);

    let result = service.save_category(&cat, temp.path());

    assert!(matches!(result, Err(ApplicationError::FileOpen { .. })));
}

#[test]
fn given_catalog_when_saving_then_blocks_in_catalog_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    let service = service();
    let mut catalog = Catalog::new();
    catalog.add_sorted("Fruits").unwrap();
    catalog.add_sorted("Colors").unwrap();

    // Act
    service.save_catalog(&catalog, &path).unwrap();

    // Assert - sorted on add: Colors before Fruits
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "#Colors\n#Fruits\n");
}

#[test]
fn given_file_with_two_blocks_when_loading_catalog_then_both_categories_appear() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    std::fs::write(&path, "#Fruits\napple\nbanana\n#Colors\nred\n").unwrap();
    let service = service();
    let mut catalog = Catalog::new();

    // Act
    service.load_catalog(&mut catalog, &path).unwrap();

    // Assert - file order preserved, no re-sort on load
    let names: Vec<&str> = catalog.iter().map(|cat| cat.name()).collect();
    assert_eq!(names, vec!["Fruits", "Colors"]);
    let fruits: Vec<&str> = catalog
        .find_by_name("Fruits")
        .unwrap()
        .words()
        .iter()
        .map(|w| w.as_str())
        .collect();
    assert_eq!(fruits, vec!["apple", "banana"]);
    assert_eq!(catalog.find_by_name("Colors").unwrap().words().len(), 1);
}

#[test]
fn given_populated_catalog_when_loading_then_existing_categories_kept() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    std::fs::write(&path, "#New\nword\n").unwrap();
    let service = service();
    let mut catalog = Catalog::new();
    catalog.add_sorted("Existing").unwrap();

    // Act
    service.load_catalog(&mut catalog, &path).unwrap();

    // Assert
    let names: Vec<&str> = catalog.iter().map(|cat| cat.name()).collect();
    assert_eq!(names, vec!["Existing", "New"]);
}

#[test]
fn given_save_then_load_when_round_tripping_catalog_then_contents_match() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    let service = service();
    let mut catalog = Catalog::new();
    catalog.add_sorted("Fruits").unwrap();
    let index = catalog.positions_by_name("Fruits")[0];
    let cat = catalog.get_mut(index).unwrap();
    cat.words_mut().push_back(Word::new("apple").unwrap());
    service.save_catalog(&catalog, &path).unwrap();

    // Act
    let mut loaded = Catalog::new();
    service.load_catalog(&mut loaded, &path).unwrap();

    // Assert
    assert_eq!(loaded.len(), 1);
    let words: Vec<&str> = loaded
        .find_by_name("Fruits")
        .unwrap()
        .words()
        .iter()
        .map(|w| w.as_str())
        .collect();
    assert_eq!(words, vec!["apple"]);
}
