//! # Signwave
//!
//! A library that turns free-form English sentences into ordered sequences of
//! sign-language animation tokens, each backed by an available pre-rendered
//! clip, with letter-by-letter spelling as the last resort.
//!
//! ## Features
//!
//! - Text sanitization, Unicode word tokenization, and part-of-speech tagging
//! - Count-based tense inference from the tag sequence
//! - Stopword filtering with a protected allow-list of essential words
//! - POS-keyed lemmatization (verb, noun, adjective modes)
//! - Synonym fallback: a custom lexicon first, then a synset dictionary
//! - Clip availability resolution with character decomposition fallback
//!
//! ## Pipeline
//!
//! ```text
//! raw text
//!   → sanitize + tokenize + tag + tense vote   (analysis)
//!   → stopword filter + lemmatize              (normalization)
//!   → clip / synonym / letter resolution       (sequencing)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use signwave::clip::MemoryClipStore;
//! use signwave::lexicon::Lexicon;
//! use signwave::pipeline::TranslationPipeline;
//! use signwave::synset::SynsetDictionary;
//!
//! let clips = MemoryClipStore::from_words(["me", "eat", "rice"]);
//! let pipeline = TranslationPipeline::new(
//!     Arc::new(Lexicon::new()),
//!     Arc::new(SynsetDictionary::new()),
//!     Arc::new(clips),
//! )
//! .unwrap();
//!
//! let translation = pipeline.translate("I am eating rice").unwrap();
//! assert_eq!(translation.words, vec!["me", "eat", "rice"]);
//! ```

pub mod analysis;
pub mod clip;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod resolver;
pub mod sequencer;
pub mod synset;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
