//! Whitespace-token input reader for the interactive menu.
//!
//! Words are read as whitespace-delimited tokens that may span lines, while a
//! meaning is the remainder of the line the word was typed on, or the
//! following line when that remainder is blank.

use std::io::{self, BufRead};

/// Reads tokens and lines from a buffered source.
#[derive(Debug)]
pub struct InputReader<R> {
    source: R,
    /// Unconsumed part of the most recently read line
    pending: String,
}

impl<R: BufRead> InputReader<R> {
    /// Wraps a buffered reader.
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: String::new(),
        }
    }

    /// Reads one raw line into `pending`. Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        self.pending.clear();
        Ok(self.source.read_line(&mut self.pending)? > 0)
    }

    /// Returns the next whitespace-delimited token.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(token))` - The next token.
    /// * `Ok(None)` - Input ended before a token was found.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let trimmed = self.pending.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.pending = trimmed[end..].to_string();
                return Ok(Some(token));
            }

            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    /// Returns the rest of the current line, or the next line if the rest is
    /// blank. Surrounding whitespace is trimmed.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The line, possibly empty.
    /// * `Ok(None)` - Input ended.
    pub fn rest_of_line(&mut self) -> io::Result<Option<String>> {
        let rest = std::mem::take(&mut self.pending);
        let rest = rest.trim();
        if !rest.is_empty() {
            return Ok(Some(rest.to_string()));
        }

        if !self.fill()? {
            return Ok(None);
        }
        let line = std::mem::take(&mut self.pending);
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> InputReader<&[u8]> {
        InputReader::new(input.as_bytes())
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut input = reader("  1\n\n  cat   dog\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("cat"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("dog"));
        assert_eq!(input.next_token().unwrap(), None);
    }

    #[test]
    fn test_rest_of_line_on_same_line() {
        let mut input = reader("cat a small mammal\nnext\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("cat"));
        assert_eq!(
            input.rest_of_line().unwrap().as_deref(),
            Some("a small mammal")
        );
        assert_eq!(input.next_token().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_rest_of_line_reads_following_line() {
        let mut input = reader("cat\n  a small mammal  \n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("cat"));
        assert_eq!(
            input.rest_of_line().unwrap().as_deref(),
            Some("a small mammal")
        );
        assert_eq!(input.next_token().unwrap(), None);
    }

    #[test]
    fn test_rest_of_line_at_end_of_input() {
        let mut input = reader("cat");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("cat"));
        assert_eq!(input.rest_of_line().unwrap(), None);
    }

    #[test]
    fn test_blank_following_line_gives_empty_meaning() {
        let mut input = reader("cat\n\n");
        input.next_token().unwrap();
        assert_eq!(input.rest_of_line().unwrap().as_deref(), Some(""));
    }
}
