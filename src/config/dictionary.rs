//! Dictionary configuration module.
//!
//! Controls which entries are loaded into the dictionary at startup.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Entries preloaded when `seed_defaults` is enabled.
pub const DEFAULT_ENTRIES: [(&str, &str); 5] = [
    (
        "cat",
        "A small domesticated carnivorous mammal with soft fur, a short snout, and retractable claws.",
    ),
    (
        "dog",
        "A domesticated mammal of the family Canidae, known for its loyalty and as a popular pet.",
    ),
    (
        "book",
        "A written or printed work consisting of pages glued or sewn together and bound in covers.",
    ),
    (
        "computer",
        "An electronic device capable of performing various tasks, such as data processing and calculations.",
    ),
    (
        "tree",
        "A large perennial plant with a single main stem and many branches, typically found in nature.",
    ),
];

/// A single word and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// The word to store
    pub word: String,

    /// Its meaning
    pub meaning: String,
}

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Whether to preload the built-in entries
    pub seed_defaults: bool,

    /// Extra entries, inserted after the built-in ones
    pub seed: Vec<SeedEntry>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            seed: Vec::new(),
        }
    }
}

impl DictionaryConfig {
    /// All startup entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let defaults: &[(&str, &str)] = if self.seed_defaults {
            &DEFAULT_ENTRIES
        } else {
            &[]
        };

        defaults.iter().copied().chain(
            self.seed
                .iter()
                .map(|entry| (entry.word.as_str(), entry.meaning.as_str())),
        )
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        for entry in &self.seed {
            // Words are read back from the menu as whitespace-delimited tokens
            if entry.word.is_empty() || entry.word.chars().any(char::is_whitespace) {
                return Err(ConfigError::ValidationError(format!(
                    "Seed word {:?} must be non-empty and contain no whitespace",
                    entry.word
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_include_defaults_then_seed() {
        let config = DictionaryConfig {
            seed_defaults: true,
            seed: vec![SeedEntry {
                word: "cat".to_string(),
                meaning: "override".to_string(),
            }],
        };

        let entries: Vec<(&str, &str)> = config.entries().collect();
        assert_eq!(entries.len(), DEFAULT_ENTRIES.len() + 1);
        assert_eq!(entries[0].0, "cat");
        assert_eq!(entries.last(), Some(&("cat", "override")));
    }

    #[test]
    fn test_entries_without_defaults() {
        let config = DictionaryConfig {
            seed_defaults: false,
            seed: Vec::new(),
        };
        assert_eq!(config.entries().count(), 0);
    }
}
