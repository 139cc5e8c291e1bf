//! Animation sequencing: per-word clip resolution.
//!
//! Each normalized word runs through a small state machine, terminal on the
//! first successful branch with no backtracking:
//!
//! 1. direct hit: a clip exists for the word itself;
//! 2. synonym fallback: the resolver finds a candidate whose clip exists;
//! 3. letter fallback: decompose the word into individual characters
//!    (single-character clips are assumed to exist and are not re-verified).
//!
//! Synonym substitutions are recorded in the sequence for observability.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use signwave::clip::MemoryClipStore;
//! use signwave::lexicon::Lexicon;
//! use signwave::resolver::SynonymResolver;
//! use signwave::sequencer::{AnimationToken, Sequencer};
//! use signwave::synset::SynsetDictionary;
//!
//! let resolver = SynonymResolver::new(
//!     Arc::new(Lexicon::from_entries([("hi", "hello")])),
//!     Arc::new(SynsetDictionary::new()),
//! );
//! let sequencer = Sequencer::new(Arc::new(MemoryClipStore::from_words(["hello"])), resolver);
//!
//! let sequence = sequencer.sequence(&["hi".to_string()]);
//! assert_eq!(sequence.tokens, vec![AnimationToken::Word("hello".to_string())]);
//! assert_eq!(sequence.synonyms["hi"], "hello");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::clip::{ClipStore, clip_file_name};
use crate::resolver::SynonymResolver;

/// The final unit emitted to the renderer: a whole word with a clip, or a
/// single character from the spelling fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AnimationToken {
    Word(String),
    Letter(char),
}

impl AnimationToken {
    /// The clip file this token plays.
    pub fn clip_name(&self) -> String {
        match self {
            AnimationToken::Word(word) => clip_file_name(word),
            AnimationToken::Letter(c) => clip_file_name(&c.to_string()),
        }
    }
}

impl fmt::Display for AnimationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationToken::Word(word) => write!(f, "{word}"),
            AnimationToken::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// An ordered token sequence plus the synonym substitutions made while
/// building it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GestureSequence {
    /// Tokens in input word order
    pub tokens: Vec<AnimationToken>,
    /// original word -> substituted synonym (observability only)
    pub synonyms: HashMap<String, String>,
}

/// Resolves normalized words against the clip store.
#[derive(Clone, Debug)]
pub struct Sequencer {
    clips: Arc<dyn ClipStore>,
    resolver: SynonymResolver,
}

impl Sequencer {
    /// Create a sequencer over a clip store and a synonym resolver.
    pub fn new(clips: Arc<dyn ClipStore>, resolver: SynonymResolver) -> Self {
        Sequencer { clips, resolver }
    }

    fn clip_available(&self, word: &str) -> bool {
        self.clips.file_exists(&clip_file_name(word))
    }

    /// Turn normalized words into the final token sequence.
    pub fn sequence(&self, words: &[String]) -> GestureSequence {
        let mut sequence = GestureSequence::default();

        for word in words {
            if self.clip_available(word) {
                log::info!("clip hit for '{word}'");
                sequence.tokens.push(AnimationToken::Word(word.clone()));
                continue;
            }

            if let Some(synonym) = self.resolver.resolve(word) {
                if self.clip_available(&synonym) {
                    log::info!("using synonym '{synonym}' for '{word}'");
                    sequence.synonyms.insert(word.clone(), synonym.clone());
                    sequence.tokens.push(AnimationToken::Word(synonym));
                    continue;
                }
            }

            log::warn!("no animation clip for '{word}', spelling it out");
            sequence
                .tokens
                .extend(word.chars().map(AnimationToken::Letter));
        }

        sequence
    }
}
