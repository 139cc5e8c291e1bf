//! Synset dictionary: the general lexical-semantic network.
//!
//! Synonyms are organized as sense groups ("synsets"): each group is a list
//! of terms expressing one concept. The JSON file format is an array of
//! groups:
//!
//! ```json
//! [
//!   ["hello", "hi", "howdy"],
//!   ["large", "big", "great"]
//! ]
//! ```
//!
//! Looking up a word flattens the members of every group containing it, in
//! file order. Whichever term comes first is the "first synonym" the
//! resolver will try; that ordering is best-effort, not a strict contract.
//!
//! # Examples
//!
//! ```
//! use signwave::synset::SynsetDictionary;
//!
//! let synsets = SynsetDictionary::from_groups(vec![
//!     vec!["hello".to_string(), "hi".to_string(), "howdy".to_string()],
//! ]);
//!
//! assert_eq!(synsets.lemmas("howdy"), vec!["hello", "hi", "howdy"]);
//! assert!(synsets.lemmas("bye").is_empty());
//! ```

use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, SignwaveError};

/// Synonym groups with a membership index for lookup.
#[derive(Clone, Debug, Default)]
pub struct SynsetDictionary {
    groups: Vec<Vec<String>>,
    /// word -> indices of the groups containing it, in file order
    membership: AHashMap<String, Vec<usize>>,
}

impl SynsetDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        SynsetDictionary::default()
    }

    /// Build a dictionary from synonym groups, preserving group order.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Self {
        let mut membership: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (index, group) in groups.iter().enumerate() {
            for term in group {
                membership.entry(term.clone()).or_default().push(index);
            }
        }
        SynsetDictionary { groups, membership }
    }

    /// Load a dictionary from a JSON file of synonym groups.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SignwaveError::lexicon(format!(
                "failed to read synset dictionary '{}': {e}",
                path.display()
            ))
        })?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            SignwaveError::lexicon(format!(
                "failed to parse synset dictionary JSON from '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_groups(groups))
    }

    /// All lemma forms across every synset containing the word, flattened
    /// in file order. The word itself is included where listed.
    pub fn lemmas(&self, word: &str) -> Vec<String> {
        match self.membership.get(word) {
            Some(indices) => indices
                .iter()
                .flat_map(|&i| self.groups[i].iter().cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of synsets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
