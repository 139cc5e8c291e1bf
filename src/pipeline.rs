//! The end-to-end translation pipeline.
//!
//! Composes the linguistic analyzer, word normalizer, and animation
//! sequencer into a single entry point. Each invocation is stateless and
//! one-shot; the lexicon, synset dictionary, and clip store are injected as
//! shared read-only values at construction, so concurrent invocations need
//! no locking.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use signwave::clip::MemoryClipStore;
//! use signwave::lexicon::Lexicon;
//! use signwave::pipeline::TranslationPipeline;
//! use signwave::synset::SynsetDictionary;
//!
//! let pipeline = TranslationPipeline::new(
//!     Arc::new(Lexicon::new()),
//!     Arc::new(SynsetDictionary::new()),
//!     Arc::new(MemoryClipStore::from_words(["he", "will", "go"])),
//! )
//! .unwrap();
//!
//! let translation = pipeline.translate("He will go").unwrap();
//! assert_eq!(translation.words, vec!["he", "will", "go"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::analysis::analyzer::LinguisticAnalyzer;
use crate::analysis::normalize::WordNormalizer;
use crate::analysis::tense::Tense;
use crate::clip::ClipStore;
use crate::error::{Result, SignwaveError};
use crate::lexicon::Lexicon;
use crate::resolver::SynonymResolver;
use crate::sequencer::{AnimationToken, Sequencer};
use crate::synset::SynsetDictionary;

/// Everything the rendering collaborator consumes for one sentence.
#[derive(Clone, Debug, Serialize)]
pub struct Translation {
    /// Sanitized, lowercased input text
    pub text: String,
    /// Probable tense inferred from the tag sequence
    pub tense: Tense,
    /// Normalized gloss words, before clip resolution
    pub words: Vec<String>,
    /// Final animation tokens in input order
    pub tokens: Vec<AnimationToken>,
    /// original word -> substituted synonym
    pub synonyms: HashMap<String, String>,
}

/// Sentence-to-animation-token pipeline.
#[derive(Clone, Debug)]
pub struct TranslationPipeline {
    analyzer: LinguisticAnalyzer,
    normalizer: WordNormalizer,
    sequencer: Sequencer,
}

impl TranslationPipeline {
    /// Create a pipeline over shared, read-only synonym and clip sources.
    pub fn new(
        lexicon: Arc<Lexicon>,
        synsets: Arc<SynsetDictionary>,
        clips: Arc<dyn ClipStore>,
    ) -> Result<Self> {
        Ok(TranslationPipeline {
            analyzer: LinguisticAnalyzer::new()?,
            normalizer: WordNormalizer::new(),
            sequencer: Sequencer::new(clips, SynonymResolver::new(lexicon, synsets)),
        })
    }

    /// Translate one sentence into an ordered animation token sequence.
    ///
    /// An empty sentence is rejected with [`SignwaveError::EmptyInput`].
    /// Input that sanitizes to nothing (pure punctuation) proceeds and
    /// yields an empty sequence.
    pub fn translate(&self, text: &str) -> Result<Translation> {
        if text.is_empty() {
            return Err(SignwaveError::EmptyInput);
        }

        let analysis = self.analyzer.analyze(text);
        log::info!("chosen tense: {}", analysis.tense);

        let words = self.normalizer.normalize(&analysis.tokens);
        log::info!("final processed words: {words:?}");

        let sequence = self.sequencer.sequence(&words);

        Ok(Translation {
            text: analysis.text,
            tense: analysis.tense,
            words,
            tokens: sequence.tokens,
            synonyms: sequence.synonyms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::MemoryClipStore;

    fn pipeline(clips: MemoryClipStore) -> TranslationPipeline {
        TranslationPipeline::new(
            Arc::new(Lexicon::new()),
            Arc::new(SynsetDictionary::new()),
            Arc::new(clips),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let pipeline = pipeline(MemoryClipStore::new());
        let err = pipeline.translate("").unwrap_err();
        assert!(matches!(err, SignwaveError::EmptyInput));
        assert_eq!(err.user_message(), "No input text provided.");
    }

    #[test]
    fn test_whitespace_only_input_proceeds() {
        let pipeline = pipeline(MemoryClipStore::new());
        let translation = pipeline.translate("   ").unwrap();
        assert!(translation.tokens.is_empty());
        assert_eq!(translation.tense, Tense::Present);
    }

    #[test]
    fn test_translation_carries_sanitized_text() {
        let pipeline = pipeline(MemoryClipStore::from_words(["me", "eat", "rice"]));
        let translation = pipeline.translate("I am eating rice!").unwrap();
        assert_eq!(translation.text, "i am eating rice");
    }
}
