//! Custom synonym lexicon, authoritative over the synset dictionary.
//!
//! The lexicon maps a lowercase word to exactly one synonym string and is
//! loaded once at startup from a JSON object file:
//!
//! ```json
//! { "hi": "hello", "large": "big" }
//! ```
//!
//! Loading never fails: a missing file or malformed JSON is logged at error
//! level and degrades to an empty lexicon, so the synonym resolver falls
//! through to the synset dictionary. The loaded value is immutable for the
//! process lifetime and is meant to be shared behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use signwave::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_entries([("hi", "hello")]);
//! assert_eq!(lexicon.lookup("hi"), Some("hello"));
//! assert_eq!(lexicon.lookup("bye"), None);
//! ```

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// Word-to-synonym override table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: AHashMap<String, String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Build a lexicon from key/value pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Lexicon {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a lexicon from a JSON object file.
    ///
    /// On any failure this logs the condition and returns an empty lexicon
    /// rather than propagating an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                log::error!(
                    "could not load synonym lexicon from '{}': {e}",
                    path.display()
                );
                Lexicon::new()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self::from_entries(entries))
    }

    /// Look up the synonym for a word. Exact lowercase key match.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|s| s.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_lookup() {
        let lexicon = Lexicon::from_entries([("hi", "hello"), ("large", "big")]);
        assert_eq!(lexicon.lookup("hi"), Some("hello"));
        assert_eq!(lexicon.lookup("large"), Some("big"));
        assert_eq!(lexicon.lookup("missing"), None);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hi": "hello"}}"#).unwrap();

        let lexicon = Lexicon::load(file.path());
        assert_eq!(lexicon.lookup("hi"), Some("hello"));
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let lexicon = Lexicon::load("/nonexistent/synonyms.json");
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let lexicon = Lexicon::load(file.path());
        assert!(lexicon.is_empty());
    }
}
