//! Text analysis module for Signwave.
//!
//! This module provides the linguistic half of the pipeline: sanitization,
//! tokenization, part-of-speech tagging, tense inference, and gloss
//! normalization (stopword filtering plus POS-keyed lemmatization).

pub mod analyzer;
pub mod lemma;
pub mod normalize;
pub mod sanitize;
pub mod tagger;
pub mod tense;
pub mod token;
pub mod tokenizer;
