//! Input sanitization applied before tokenization.
//!
//! Strips every character outside `[a-zA-Z0-9\s]` and lowercases the result.
//! Empty output is legal; the pipeline proceeds and simply produces no
//! tokens.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::sanitize::Sanitizer;
//!
//! let sanitizer = Sanitizer::new().unwrap();
//! assert_eq!(sanitizer.sanitize("Hello, World!"), "hello world");
//! ```

use regex::Regex;

use crate::error::{Result, SignwaveError};

/// A char filter that removes everything but ASCII letters, digits, and
/// whitespace, then lowercases.
#[derive(Clone, Debug)]
pub struct Sanitizer {
    pattern: Regex,
}

impl Sanitizer {
    /// Create a new sanitizer.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"[^a-zA-Z0-9\s]")
            .map_err(|e| SignwaveError::analysis(format!("invalid sanitize pattern: {e}")))?;
        Ok(Sanitizer { pattern })
    }

    /// Apply this filter to the input text.
    pub fn sanitize(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").to_lowercase()
    }

    /// Get the name of this char filter.
    pub fn name(&self) -> &'static str {
        "sanitize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_special_characters() {
        let sanitizer = Sanitizer::new().unwrap();
        assert_eq!(sanitizer.sanitize("don't stop!"), "dont stop");
        assert_eq!(sanitizer.sanitize("a+b=c"), "abc");
    }

    #[test]
    fn test_lowercases() {
        let sanitizer = Sanitizer::new().unwrap();
        assert_eq!(sanitizer.sanitize("He Will GO"), "he will go");
    }

    #[test]
    fn test_keeps_digits_and_whitespace() {
        let sanitizer = Sanitizer::new().unwrap();
        assert_eq!(sanitizer.sanitize("room 42\tnow"), "room 42\tnow");
    }

    #[test]
    fn test_pure_punctuation_becomes_whitespace_only() {
        let sanitizer = Sanitizer::new().unwrap();
        let out = sanitizer.sanitize("!!! ??? ...");
        assert!(out.chars().all(char::is_whitespace));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(Sanitizer::new().unwrap().name(), "sanitize");
    }
}
