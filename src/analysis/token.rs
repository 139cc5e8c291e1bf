//! Token types for text analysis.
//!
//! A [`Token`] is a tagged word: the surface form produced by the tokenizer
//! together with its part-of-speech tag and position. Tokens are immutable
//! once tagged; they are created per input word, consumed by normalization,
//! and discarded after the pipeline run.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::token::{PosTag, Token};
//!
//! let token = Token::new("eating", PosTag::Vbg, 2);
//! assert_eq!(token.text, "eating");
//! assert_eq!(token.tag, PosTag::Vbg);
//! assert!(token.tag.is_verb());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech tag from a fixed Penn-Treebank-style inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Coordinating conjunction (and, or)
    Cc,
    /// Cardinal number
    Cd,
    /// Determiner (the, this, no)
    Dt,
    /// Existential "there"
    Ex,
    /// Preposition or subordinating conjunction
    In,
    /// Adjective
    Jj,
    /// Adjective, comparative
    Jjr,
    /// Adjective, superlative
    Jjs,
    /// Modal (will, can, must)
    Md,
    /// Noun, singular or mass
    Nn,
    /// Noun, plural
    Nns,
    /// Personal pronoun
    Prp,
    /// Possessive pronoun (my, your)
    PrpPoss,
    /// Adverb
    Rb,
    /// Adverb, comparative
    Rbr,
    /// Adverb, superlative
    Rbs,
    /// "to"
    To,
    /// Interjection (yes, hello)
    Uh,
    /// Verb, base form
    Vb,
    /// Verb, past tense
    Vbd,
    /// Verb, gerund or present participle
    Vbg,
    /// Verb, past participle
    Vbn,
    /// Verb, non-3rd person singular present
    Vbp,
    /// Verb, 3rd person singular present
    Vbz,
    /// Wh-determiner (which)
    Wdt,
    /// Wh-pronoun (what, who)
    Wp,
    /// Wh-adverb (where, how)
    Wrb,
}

impl PosTag {
    /// The conventional Penn Treebank spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Cc => "CC",
            PosTag::Cd => "CD",
            PosTag::Dt => "DT",
            PosTag::Ex => "EX",
            PosTag::In => "IN",
            PosTag::Jj => "JJ",
            PosTag::Jjr => "JJR",
            PosTag::Jjs => "JJS",
            PosTag::Md => "MD",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Prp => "PRP",
            PosTag::PrpPoss => "PRP$",
            PosTag::Rb => "RB",
            PosTag::Rbr => "RBR",
            PosTag::Rbs => "RBS",
            PosTag::To => "TO",
            PosTag::Uh => "UH",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Vbn => "VBN",
            PosTag::Vbp => "VBP",
            PosTag::Vbz => "VBZ",
            PosTag::Wdt => "WDT",
            PosTag::Wp => "WP",
            PosTag::Wrb => "WRB",
        }
    }

    /// Whether this is any verb tag.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Vb | PosTag::Vbd | PosTag::Vbg | PosTag::Vbn | PosTag::Vbp | PosTag::Vbz
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single tagged word flowing through the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of the word (already sanitized and lowercased)
    pub text: String,

    /// The part-of-speech tag assigned by the tagger
    pub tag: PosTag,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text, tag, and position.
    pub fn new<S: Into<String>>(text: S, tag: PosTag, position: usize) -> Self {
        Token {
            text: text.into(),
            tag,
            position,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}
