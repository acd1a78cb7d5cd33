//! Data structures for Wordhoard.
//!
//! The prefix dictionary is a leaf module: it depends on nothing else in the
//! crate and performs no I/O.

pub mod prefix_dictionary;

pub use prefix_dictionary::PrefixDictionary;
