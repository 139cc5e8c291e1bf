//! Count-based tense inference from the tag sequence.
//!
//! One pass over the tagged tokens accumulates a [`TenseVote`]; the probable
//! tense is then selected by a fixed priority order. The vote only informs
//! observability and the returned [`Translation`](crate::pipeline::Translation)
//! value; it does not reorder or inject words.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::tense::{Tense, TenseVote};
//! use signwave::analysis::token::PosTag;
//!
//! let mut vote = TenseVote::new();
//! vote.record(PosTag::Md);
//! vote.record(PosTag::Vbd);
//! // a modal always wins over past tense
//! assert_eq!(vote.probable(), Tense::Future);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{PosTag, Token};

/// Grammatical tense categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Future,
    Present,
    Past,
    PresentContinuous,
}

impl Tense {
    /// Lowercase category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Future => "future",
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::PresentContinuous => "present_continuous",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category counters accumulated over the tag sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TenseVote {
    future: u32,
    present: u32,
    past: u32,
    present_continuous: u32,
}

impl TenseVote {
    /// Create an empty vote.
    pub fn new() -> Self {
        TenseVote::default()
    }

    /// Accumulate a vote from all tokens in one pass.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut vote = TenseVote::new();
        for token in tokens {
            vote.record(token.tag);
        }
        vote
    }

    /// Record one tag.
    ///
    /// Modals vote future, present verb forms vote present, gerunds vote
    /// present continuous, past forms vote past. Non-verb tags do not vote.
    pub fn record(&mut self, tag: PosTag) {
        match tag {
            PosTag::Md => self.future += 1,
            PosTag::Vbp | PosTag::Vbz => self.present += 1,
            PosTag::Vbg => self.present_continuous += 1,
            PosTag::Vbd | PosTag::Vbn => self.past += 1,
            _ => {}
        }
    }

    /// Count for a single category.
    pub fn count(&self, tense: Tense) -> u32 {
        match tense {
            Tense::Future => self.future,
            Tense::Present => self.present,
            Tense::Past => self.past,
            Tense::PresentContinuous => self.present_continuous,
        }
    }

    /// Select the probable tense.
    ///
    /// Priority, first match wins: future if voted at all; else present
    /// continuous if both it and present were voted; else past if voted;
    /// else present, even with zero votes.
    pub fn probable(&self) -> Tense {
        if self.future > 0 {
            Tense::Future
        } else if self.present_continuous > 0 && self.present > 0 {
            Tense::PresentContinuous
        } else if self.past > 0 {
            Tense::Past
        } else {
            Tense::Present
        }
    }
}
