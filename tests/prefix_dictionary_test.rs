// Copyright (c) 2025 Wordhoard Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the prefix dictionary through the public library API.

use test_case::test_case;
use wordhoard_lib::config::dictionary::DictionaryConfig;
use wordhoard_lib::config::session::SessionConfig;
use wordhoard_lib::session::{seed_dictionary, Session};
use wordhoard_lib::PrefixDictionary;

fn seeded() -> PrefixDictionary {
    seed_dictionary(&DictionaryConfig::default())
}

#[test_case("", &["book", "cat", "computer", "dog", "tree"] ; "empty prefix lists everything")]
#[test_case("c", &["cat", "computer"] ; "shared first letter")]
#[test_case("co", &["computer"] ; "single match")]
#[test_case("computer", &["computer"] ; "whole word")]
#[test_case("computers", &[] ; "longer than any word")]
#[test_case("x", &[] ; "no transition")]
#[test_case("C", &[] ; "case sensitive")]
fn test_autocomplete_on_seeded_dictionary(prefix: &str, expected: &[&str]) {
    assert_eq!(seeded().autocomplete(prefix), expected);
}

#[test_case("cat", true ; "seeded word")]
#[test_case("ca", false ; "proper prefix")]
#[test_case("cats", false ; "extension")]
#[test_case("", false ; "empty word")]
fn test_search_on_seeded_dictionary(word: &str, found: bool) {
    assert_eq!(seeded().search(word).is_some(), found);
}

#[test]
fn test_collect_keeps_last_meaning() {
    let dictionary: PrefixDictionary = vec![("dog", "first"), ("dog", "second"), ("do", "verb")]
        .into_iter()
        .collect();

    assert_eq!(dictionary.search("dog"), Some("second"));
    assert_eq!(
        dictionary.enumerate_all(),
        vec![
            ("do".to_string(), "verb".to_string()),
            ("dog".to_string(), "second".to_string()),
        ]
    );
}

#[test]
fn test_session_edits_are_visible_to_caller() {
    let config = SessionConfig {
        show_banner: false,
        ..SessionConfig::default()
    };
    let script = "1\nbookshelf\nFurniture for books.\n2\ntree\n6\n1 lamp light\n7\n";
    let mut session = Session::new(seeded(), script.as_bytes(), Vec::new(), config);
    session.run().unwrap();

    let dictionary = session.dictionary();
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.search("lamp"), Some("light"));
    assert_eq!(dictionary.search("bookshelf"), None);
    // Only the fresh insert's nodes exist after the clear
    assert_eq!(dictionary.node_count(), 5);
}
