//! Interactive menu session.
//!
//! The session owns all terminal I/O and drives a [`PrefixDictionary`]
//! through its public operations. Reader and writer are generic so the loop
//! can run against in-memory buffers.

mod input;
pub mod menu;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::dictionary::DictionaryConfig;
use crate::config::session::SessionConfig;
use crate::data_structures::prefix_dictionary::PrefixDictionary;
use crate::error::WordhoardResult;

pub use input::InputReader;
pub use menu::{MenuChoice, BANNER};

/// Message shown when a searched word has no meaning.
pub const NOT_FOUND_MESSAGE: &str = "Word not found!";

/// Builds the startup dictionary from the configured entries.
pub fn seed_dictionary(config: &DictionaryConfig) -> PrefixDictionary {
    let dictionary: PrefixDictionary = config.entries().collect();
    info!(words = dictionary.len(), "dictionary seeded");
    dictionary
}

/// Outcome of handling one menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive session over a reader and a writer.
#[derive(Debug)]
pub struct Session<R, W> {
    dictionary: PrefixDictionary,
    input: InputReader<R>,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing dictionary.
    pub fn new(dictionary: PrefixDictionary, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            dictionary,
            input: InputReader::new(input),
            output,
            config,
        }
    }

    /// The dictionary as it currently stands.
    pub fn dictionary(&self) -> &PrefixDictionary {
        &self.dictionary
    }

    /// Consumes the session, returning the dictionary and the writer.
    pub fn into_parts(self) -> (PrefixDictionary, W) {
        (self.dictionary, self.output)
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The user chose Exit or input was exhausted.
    /// * `Err(WordhoardError::Io)` - Reading input or writing output failed.
    pub fn run(&mut self) -> WordhoardResult<()> {
        info!(words = self.dictionary.len(), "session started");

        loop {
            self.show_menu()?;

            let Some(token) = self.input.next_token()? else {
                break;
            };

            let flow = match token.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(%choice, "menu choice");
                    self.handle(choice)?
                }
                Err(err) => {
                    debug!(%err, "rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
            writeln!(self.output)?;
        }

        self.output.flush()?;
        info!("session finished");
        Ok(())
    }

    fn show_menu(&mut self) -> WordhoardResult<()> {
        if self.config.show_banner {
            writeln!(self.output, "{BANNER}")?;
        }
        write!(self.output, "{}", menu::render_menu())?;
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one token. `None` means input ended.
    fn ask_token(&mut self, prompt: &str) -> WordhoardResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }

    fn handle(&mut self, choice: MenuChoice) -> WordhoardResult<Flow> {
        match choice {
            MenuChoice::Add => {
                let Some(word) = self.ask_token("Enter the word: ")? else {
                    return Ok(Flow::Stop);
                };
                write!(self.output, "Enter the meaning: ")?;
                self.output.flush()?;
                let Some(meaning) = self.input.rest_of_line()? else {
                    return Ok(Flow::Stop);
                };

                debug!(%word, "adding word");
                self.dictionary.insert(&word, meaning);
                writeln!(self.output, "Word added successfully!")?;
            }
            MenuChoice::Remove => {
                let Some(word) = self.ask_token("Enter the word to remove: ")? else {
                    return Ok(Flow::Stop);
                };

                debug!(%word, "removing word");
                self.dictionary.remove(&word);
                writeln!(self.output, "Word removed successfully!")?;
            }
            MenuChoice::Search => {
                let Some(word) = self.ask_token("Enter the word to search: ")? else {
                    return Ok(Flow::Stop);
                };

                let meaning = self.dictionary.search(&word);
                debug!(%word, found = meaning.is_some(), "searched word");
                writeln!(
                    self.output,
                    "Meaning: {}",
                    meaning.unwrap_or(NOT_FOUND_MESSAGE)
                )?;
            }
            MenuChoice::Autocomplete => {
                let Some(prefix) = self.ask_token("Enter the prefix: ")? else {
                    return Ok(Flow::Stop);
                };

                let suggestions = self.dictionary.autocomplete(&prefix);
                debug!(%prefix, count = suggestions.len(), "autocomplete");
                writeln!(self.output, "Autocomplete suggestions:")?;
                for suggestion in &suggestions {
                    writeln!(self.output, "{suggestion}")?;
                }
            }
            MenuChoice::Show => self.show_dictionary()?,
            MenuChoice::Clear => {
                self.dictionary.clear();
                debug!("dictionary cleared");
                writeln!(self.output, "Dictionary cleared successfully!")?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting program. Goodbye!")?;
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Continue)
    }

    fn show_dictionary(&mut self) -> WordhoardResult<()> {
        let mut entries = self.dictionary.enumerate_all();
        entries.sort();

        writeln!(self.output, "===== DICTIONARY =====")?;
        for (word, meaning) in &entries {
            writeln!(self.output, "{word}: {meaning}")?;
        }
        writeln!(self.output, "=======================")?;
        Ok(())
    }
}
