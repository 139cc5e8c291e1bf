//! Gloss normalization: stopword filtering, replacements, lemmatization.
//!
//! This is a stable filter over tagged tokens. Every token whose surface
//! form is a stopword is dropped unless it is on the allow-list of
//! semantically essential words; survivors get literal gloss replacements
//! applied ("i" becomes "me") and are then lemmatized in the mode keyed on
//! their POS tag. Relative order is preserved; nothing is reordered or
//! inserted at this stage.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::normalize::WordNormalizer;
//! use signwave::analysis::token::{PosTag, Token};
//!
//! let normalizer = WordNormalizer::new();
//! let tokens = vec![
//!     Token::new("i", PosTag::Prp, 0),
//!     Token::new("am", PosTag::Vbp, 1),
//!     Token::new("eating", PosTag::Vbg, 2),
//!     Token::new("rice", PosTag::Nn, 3),
//! ];
//!
//! assert_eq!(normalizer.normalize(&tokens), vec!["me", "eat", "rice"]);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::lemma::{LemmaMode, Lemmatizer};
use crate::analysis::token::Token;

/// Common English stop words (apostrophe-free forms only, since
/// sanitization runs first).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll",
    "m", "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor",
    "not", "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn",
    "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Semantically essential words that must survive stopword filtering:
/// pronouns, negation, temporal markers, and a fixed set of domain words.
const ESSENTIAL_WORDS: &[&str] = &[
    "i", "he", "she", "they", "we", "what", "where", "how", "you", "your", "my", "name",
    "hear", "book", "sign", "me", "yes", "no", "not", "now", "before", "will",
];

/// Literal substitutions applied before lemmatization.
const GLOSS_REPLACEMENTS: &[(&str, &str)] = &[("i", "me")];

/// Effective stop set: the stopword list minus the allow-list.
static EFFECTIVE_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let essential: HashSet<&str> = ESSENTIAL_WORDS.iter().copied().collect();
    ENGLISH_STOP_WORDS
        .iter()
        .copied()
        .filter(|w| !essential.contains(w))
        .collect()
});

/// Filter and lemmatize tagged tokens into gloss words.
#[derive(Clone, Debug)]
pub struct WordNormalizer {
    replacements: AHashMap<&'static str, &'static str>,
    lemmatizer: Lemmatizer,
}

impl WordNormalizer {
    /// Create a normalizer with the default word lists.
    pub fn new() -> Self {
        WordNormalizer {
            replacements: GLOSS_REPLACEMENTS.iter().copied().collect(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Whether the word would be dropped by stopword filtering.
    pub fn is_stop_word(&self, word: &str) -> bool {
        EFFECTIVE_STOP_WORDS.contains(word)
    }

    /// Filter, replace, and lemmatize, preserving relative order.
    pub fn normalize(&self, tokens: &[Token]) -> Vec<String> {
        let mut words = Vec::with_capacity(tokens.len());
        for token in tokens {
            if self.is_stop_word(&token.text) {
                continue;
            }
            let word = self
                .replacements
                .get(token.text.as_str())
                .copied()
                .unwrap_or(token.text.as_str());
            words.push(self.lemmatizer.lemmatize(word, LemmaMode::for_tag(token.tag)));
        }
        words
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
