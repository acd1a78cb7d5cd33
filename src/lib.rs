//! Wordhoard Library
//!
//! An in-memory prefix dictionary mapping words to meanings, with exact
//! lookup, prefix suggestions, removal, listing and clearing, plus the
//! interactive menu session and configuration used by the `wordhoard` binary.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_dictionary`] is the trie itself and has no
//!   dependencies on the rest of the crate
//! - [`session`] owns all terminal I/O and calls into the trie
//! - [`config`], [`error`] and [`logging`] are shared infrastructure

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Wordhoard.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use data_structures::prefix_dictionary::PrefixDictionary;
