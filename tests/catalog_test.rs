//! Tests for Catalog ordering, aggregation, and one-pass parsing

use lexicat::domain::{Catalog, DomainError, Word};

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.iter().map(|cat| cat.name()).collect()
}

fn push_words(catalog: &mut Catalog, name: &str, words: &[&str]) {
    let index = catalog
        .positions_by_name(name)
        .first()
        .copied()
        .expect("category exists");
    let cat = catalog.get_mut(index).expect("index valid");
    for text in words {
        cat.words_mut().push_back(Word::new(*text).unwrap());
    }
}

#[test]
fn given_unordered_adds_when_adding_sorted_then_names_ascend() {
    // Arrange
    let mut catalog = Catalog::new();

    // Act
    catalog.add_sorted("Zebra").unwrap();
    catalog.add_sorted("Apple").unwrap();
    catalog.add_sorted("Mango").unwrap();

    // Assert
    assert_eq!(names(&catalog), vec!["Apple", "Mango", "Zebra"]);
}

#[test]
fn given_empty_name_when_adding_then_rejected() {
    let mut catalog = Catalog::new();

    let result = catalog.add_sorted("");

    assert!(matches!(result, Err(DomainError::EmptyName)));
    assert!(catalog.is_empty());
}

#[test]
fn given_duplicate_names_when_removing_then_all_matches_go() {
    // Arrange - duplicate names are permitted
    let mut catalog = Catalog::new();
    catalog.add_sorted("Twice").unwrap();
    catalog.add_sorted("Twice").unwrap();
    catalog.add_sorted("Other").unwrap();

    // Act
    catalog.remove_by_name("Twice");

    // Assert
    assert_eq!(names(&catalog), vec!["Other"]);
}

#[test]
fn given_absent_name_when_removing_then_noop() {
    let mut catalog = Catalog::new();
    catalog.add_sorted("Only").unwrap();

    catalog.remove_by_name("Missing");

    assert_eq!(catalog.len(), 1);
}

#[test]
fn given_matching_name_when_clearing_then_words_go_but_category_stays() {
    // Arrange
    let mut catalog = Catalog::new();
    catalog.add_sorted("Fruits").unwrap();
    push_words(&mut catalog, "Fruits", &["apple", "banana"]);

    // Act
    catalog.clear_by_name("Fruits");

    // Assert
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find_by_name("Fruits").unwrap().words().is_empty());
}

#[test]
fn given_rename_through_get_mut_when_not_adding_then_order_is_stale() {
    // Re-sort happens on add only; a rename leaves the order as-is
    let mut catalog = Catalog::new();
    catalog.add_sorted("Apple").unwrap();
    catalog.add_sorted("Mango").unwrap();

    catalog.get_mut(0).unwrap().rename("Zebra").unwrap();

    assert_eq!(names(&catalog), vec!["Zebra", "Mango"]);
}

#[test]
fn given_words_across_categories_when_dumping_sorted_then_plain_lexicographic() {
    // Arrange
    let mut catalog = Catalog::new();
    catalog.add_sorted("Fruits").unwrap();
    catalog.add_sorted("Colors").unwrap();
    push_words(&mut catalog, "Fruits", &["banana", "Apple"]);
    push_words(&mut catalog, "Colors", &["red"]);

    // Act
    let words = catalog.all_words_sorted();

    // Assert - case-sensitive ordering: uppercase first
    let texts: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, vec!["Apple", "banana", "red"]);
}

#[test]
fn given_catalog_when_rendering_all_sorted_then_names_ascend_and_words_fold() {
    // Arrange
    let mut catalog = Catalog::new();
    catalog.add_sorted("Zoo").unwrap();
    catalog.add_sorted("Art").unwrap();
    push_words(&mut catalog, "Zoo", &["Lion", "ant"]);

    // Act
    let text = catalog.render_all_sorted();

    // Assert
    assert_eq!(text, "Art\nZoo\nant\nLion\n");
}

#[test]
fn given_two_blocks_when_parsing_then_two_categories_in_file_order() {
    // Arrange
    let content = "#Fruits\napple\nbanana\n#Colors\nred\n";

    // Act
    let categories = Catalog::parse(content).unwrap();

    // Assert
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name(), "Fruits");
    let fruits: Vec<&str> = categories[0].words().iter().map(|w| w.as_str()).collect();
    assert_eq!(fruits, vec!["apple", "banana"]);
    assert_eq!(categories[1].name(), "Colors");
    let colors: Vec<&str> = categories[1].words().iter().map(|w| w.as_str()).collect();
    assert_eq!(colors, vec!["red"]);
}

#[test]
fn given_blank_line_when_parsing_then_block_ends_and_trailing_lines_ignored() {
    let content = "#Fruits\napple\n\norphan\n#Colors\nred\n";

    let categories = Catalog::parse(content).unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].words().len(), 1);
}

#[test]
fn given_lines_before_first_marker_when_parsing_then_they_are_ignored() {
    let content = "preamble\n#Fruits\napple\n";

    let categories = Catalog::parse(content).unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].words().len(), 1);
}

#[test]
fn given_marker_without_name_when_parsing_then_empty_name_error() {
    let content = "#\napple\n";

    let result = Catalog::parse(content);

    assert!(matches!(result, Err(DomainError::EmptyName)));
}

#[test]
fn given_same_name_twice_when_parsing_then_each_block_keeps_its_own_words() {
    let content = "#Fruits\napple\n#Fruits\nbanana\n";

    let categories = Catalog::parse(content).unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].words().get(0).unwrap().as_str(), "apple");
    assert_eq!(categories[1].words().get(0).unwrap().as_str(), "banana");
}

#[test]
fn given_empty_content_when_parsing_then_no_categories() {
    let categories = Catalog::parse("").unwrap();

    assert!(categories.is_empty());
}
