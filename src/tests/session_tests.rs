//! Scripted interactive sessions.
//!
//! Each test feeds a full keyboard transcript to the menu loop and checks the
//! printed output and the resulting dictionary.

use super::test_utils::run_script;
use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::prefix_dictionary::PrefixDictionary;
use crate::session::seed_dictionary;

fn seeded() -> PrefixDictionary {
    seed_dictionary(&DictionaryConfig::default())
}

#[test]
fn test_show_dictionary_is_sorted() {
    let (_, output) = run_script(seeded(), "5\n7\n");

    let listing: Vec<&str> = output
        .lines()
        .skip_while(|line| !line.ends_with("===== DICTIONARY ====="))
        .skip(1)
        .take_while(|line| *line != "=======================")
        .collect();

    let words: Vec<&str> = listing
        .iter()
        .filter_map(|line| line.split_once(": ").map(|(word, _)| word))
        .collect();
    assert_eq!(words, vec!["book", "cat", "computer", "dog", "tree"]);
    assert!(listing[1].starts_with("cat: A small domesticated carnivorous mammal"));
}

#[test]
fn test_search_reports_missing_word() {
    let (_, output) = run_script(seeded(), "3\nunicorn\n3\ncomp\n7\n");
    assert_eq!(output.matches("Meaning: Word not found!\n").count(), 2);
}

#[test]
fn test_autocomplete_lists_matches() {
    let (_, output) = run_script(seeded(), "1 cab a taxi\n4\nc\n7\n");

    let suggestions: Vec<&str> = output
        .lines()
        .skip_while(|line| !line.ends_with("Autocomplete suggestions:"))
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect();
    assert_eq!(suggestions, vec!["cab", "cat", "computer"]);
}

#[test]
fn test_autocomplete_unknown_prefix_prints_nothing() {
    let (_, output) = run_script(seeded(), "4\nxyz\n7\n");
    assert!(output.contains("Autocomplete suggestions:\n\n"));
}

#[test]
fn test_remove_then_search() {
    let (dictionary, output) = run_script(seeded(), "2\ndog\n3\ndog\n7\n");

    assert!(output.contains("Word removed successfully!"));
    assert!(output.contains("Meaning: Word not found!"));
    assert!(!dictionary.contains("dog"));
    assert_eq!(dictionary.len(), 4);
}

#[test]
fn test_remove_absent_word_still_confirms() {
    let (dictionary, output) = run_script(seeded(), "2\nunicorn\n7\n");
    assert!(output.contains("Word removed successfully!"));
    assert_eq!(dictionary.len(), 5);
}

#[test]
fn test_add_overwrites_meaning() {
    let (dictionary, _) = run_script(seeded(), "1\ntree\na hierarchy of nodes\n7\n");
    assert_eq!(dictionary.search("tree"), Some("a hierarchy of nodes"));
    assert_eq!(dictionary.len(), 5);
}

#[test]
fn test_clear_then_show() {
    let (dictionary, output) = run_script(seeded(), "6\n5\n7\n");

    assert!(output.contains("Dictionary cleared successfully!"));
    assert!(output.contains("===== DICTIONARY =====\n=======================\n"));
    assert!(dictionary.is_empty());
}

#[test]
fn test_input_ending_mid_command() {
    let (dictionary, output) = run_script(seeded(), "1\nlamp");
    assert!(output.ends_with("Enter the meaning: "));
    assert!(!dictionary.contains("lamp"));
}
