//! Word tokenizer based on Unicode word boundaries.
//!
//! Splits text using the Unicode Text Segmentation algorithm (UAX #29)
//! rather than naive whitespace splitting. Input reaching this stage has
//! already been sanitized to `[a-z0-9\s]`, so only alphanumeric runs
//! survive.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let words = tokenizer.tokenize("he will go");
//! assert_eq!(words, vec!["he", "will", "go"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize the given text into words, preserving input order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_string()).collect()
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = WordTokenizer::new();
        let words = tokenizer.tokenize("i am eating rice");
        assert_eq!(words, vec!["i", "am", "eating", "rice"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_numbers_are_words() {
        let tokenizer = WordTokenizer::new();
        let words = tokenizer.tokenize("room 42");
        assert_eq!(words, vec!["room", "42"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "unicode_word");
    }
}
