//! Synonym resolution fallback chain.
//!
//! The custom [`Lexicon`] is consulted first and short-circuits on a hit,
//! even when the entry would be unusable downstream; otherwise the first
//! flattened lemma from the [`SynsetDictionary`] is returned.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use signwave::lexicon::Lexicon;
//! use signwave::resolver::SynonymResolver;
//! use signwave::synset::SynsetDictionary;
//!
//! let lexicon = Arc::new(Lexicon::from_entries([("hi", "hello")]));
//! let synsets = Arc::new(SynsetDictionary::new());
//! let resolver = SynonymResolver::new(lexicon, synsets);
//!
//! assert_eq!(resolver.resolve("hi"), Some("hello".to_string()));
//! assert_eq!(resolver.resolve("xyzabc"), None);
//! ```

use std::sync::Arc;

use crate::lexicon::Lexicon;
use crate::synset::SynsetDictionary;

/// Lexicon-first synonym resolver.
#[derive(Clone, Debug)]
pub struct SynonymResolver {
    lexicon: Arc<Lexicon>,
    synsets: Arc<SynsetDictionary>,
}

impl SynonymResolver {
    /// Create a resolver over shared, read-only synonym sources.
    pub fn new(lexicon: Arc<Lexicon>, synsets: Arc<SynsetDictionary>) -> Self {
        SynonymResolver { lexicon, synsets }
    }

    /// Find a synonym for a word, or report that none exists.
    pub fn resolve(&self, word: &str) -> Option<String> {
        if let Some(synonym) = self.lexicon.lookup(word) {
            return Some(synonym.to_string());
        }
        self.synsets.lemmas(word).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(lexicon: Lexicon, synsets: SynsetDictionary) -> SynonymResolver {
        SynonymResolver::new(Arc::new(lexicon), Arc::new(synsets))
    }

    #[test]
    fn test_lexicon_short_circuits_synsets() {
        let lexicon = Lexicon::from_entries([("hi", "greeting")]);
        let synsets = SynsetDictionary::from_groups(vec![vec![
            "hello".to_string(),
            "hi".to_string(),
        ]]);

        // the lexicon entry wins even though the synsets know "hi"
        let resolver = resolver(lexicon, synsets);
        assert_eq!(resolver.resolve("hi"), Some("greeting".to_string()));
    }

    #[test]
    fn test_falls_through_to_first_synset_lemma() {
        let synsets = SynsetDictionary::from_groups(vec![vec![
            "hello".to_string(),
            "howdy".to_string(),
        ]]);

        let resolver = resolver(Lexicon::new(), synsets);
        assert_eq!(resolver.resolve("howdy"), Some("hello".to_string()));
    }

    #[test]
    fn test_no_sources_means_no_synonym() {
        let resolver = resolver(Lexicon::new(), SynsetDictionary::new());
        assert_eq!(resolver.resolve("xyzabc"), None);
    }
}
