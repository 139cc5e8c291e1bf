//! Rule-and-lexicon part-of-speech tagger.
//!
//! Assigns each word a tag from the Penn-Treebank-style inventory in
//! [`PosTag`](crate::analysis::token::PosTag). Closed-class words (pronouns,
//! modals, auxiliaries, determiners, prepositions, wh-words) and common
//! irregular verb forms come from a static lexicon; everything else falls
//! through to suffix heuristics with `NN` as the default.
//!
//! The tagger is deterministic and best-effort. Its misses land on `NN`,
//! which downstream normalization treats with the default lemmatization
//! mode, so an unknown word degrades gracefully rather than failing.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::tagger::PosTagger;
//! use signwave::analysis::token::PosTag;
//!
//! let tagger = PosTagger::new();
//! assert_eq!(tagger.tag("will"), PosTag::Md);
//! assert_eq!(tagger.tag("eating"), PosTag::Vbg);
//! assert_eq!(tagger.tag("rice"), PosTag::Nn);
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::token::{PosTag, Token};

/// Personal pronouns.
const PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them"];

/// Possessive pronouns.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

/// Modal verbs.
const MODALS: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must",
];

/// Auxiliary and copula forms with fixed tags.
const AUXILIARIES: &[(&str, PosTag)] = &[
    ("am", PosTag::Vbp),
    ("are", PosTag::Vbp),
    ("do", PosTag::Vbp),
    ("have", PosTag::Vbp),
    ("is", PosTag::Vbz),
    ("does", PosTag::Vbz),
    ("has", PosTag::Vbz),
    ("was", PosTag::Vbd),
    ("were", PosTag::Vbd),
    ("did", PosTag::Vbd),
    ("had", PosTag::Vbd),
    ("be", PosTag::Vb),
    ("been", PosTag::Vbn),
    ("done", PosTag::Vbn),
    ("being", PosTag::Vbg),
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "no", "every", "each", "some", "any",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "about", "into", "over", "under",
    "after", "against", "between", "during", "without", "within", "through", "before",
];

const WH_PRONOUNS: &[&str] = &["what", "who", "whom"];

const WH_ADVERBS: &[&str] = &["where", "when", "why", "how"];

const INTERJECTIONS: &[&str] = &["yes", "hello", "hi", "please", "thanks", "okay", "oh"];

const ADVERBS: &[&str] = &[
    "not", "now", "never", "here", "today", "tomorrow", "yesterday", "always", "very", "too",
    "again", "soon",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "happy", "sad", "hot", "cold", "new", "old", "tired",
    "hungry", "thirsty", "fine", "nice", "deaf", "sick", "fast", "slow", "tall", "short",
];

const COMPARATIVES: &[&str] = &[
    "better", "worse", "bigger", "smaller", "older", "newer", "faster", "slower", "higher",
    "lower", "easier", "harder", "more",
];

const SUPERLATIVES: &[&str] = &[
    "best", "worst", "biggest", "smallest", "oldest", "newest", "fastest", "slowest", "most",
];

/// Common verbs in base / non-3rd-person present form.
const PRESENT_VERBS: &[&str] = &[
    "eat", "go", "come", "see", "hear", "want", "like", "need", "help", "know", "think",
    "make", "take", "give", "get", "say", "tell", "ask", "read", "write", "learn", "teach",
    "play", "work", "live", "love", "sign", "speak", "talk", "walk", "run", "sit", "stand",
    "sleep", "drink", "understand", "feel", "look", "watch", "buy", "open", "close", "meet",
    "thank", "wait", "use",
];

/// Irregular past-tense forms.
const PAST_VERBS: &[&str] = &[
    "ate", "went", "came", "saw", "got", "made", "said", "took", "gave", "found", "told",
    "thought", "knew", "felt", "left", "kept", "began", "brought", "bought", "wrote", "ran",
    "sat", "spoke", "stood", "heard", "met", "paid", "slept", "won", "lost", "sent", "built",
    "spent", "fell", "drank", "drove", "flew", "grew", "drew", "wore", "sold", "broke",
    "chose", "rose", "woke", "threw", "caught", "taught", "fought", "held", "led",
    "understood",
];

/// Irregular past participles.
const PAST_PARTICIPLES: &[&str] = &[
    "gone", "eaten", "seen", "taken", "given", "written", "spoken", "broken", "chosen",
    "driven", "known", "grown", "drawn", "flown", "worn", "thrown", "fallen", "risen",
    "woken", "begun", "drunk", "sung",
];

/// Closed-class lexicon consulted before any suffix heuristic.
static CLOSED_CLASS: LazyLock<AHashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let mut map = AHashMap::new();
    let classes: &[(&[&str], PosTag)] = &[
        (PRONOUNS, PosTag::Prp),
        (POSSESSIVES, PosTag::PrpPoss),
        (MODALS, PosTag::Md),
        (DETERMINERS, PosTag::Dt),
        (CONJUNCTIONS, PosTag::Cc),
        (PREPOSITIONS, PosTag::In),
        (WH_PRONOUNS, PosTag::Wp),
        (WH_ADVERBS, PosTag::Wrb),
        (INTERJECTIONS, PosTag::Uh),
        (ADVERBS, PosTag::Rb),
        (ADJECTIVES, PosTag::Jj),
        (COMPARATIVES, PosTag::Jjr),
        (SUPERLATIVES, PosTag::Jjs),
        (PRESENT_VERBS, PosTag::Vbp),
        (PAST_VERBS, PosTag::Vbd),
        (PAST_PARTICIPLES, PosTag::Vbn),
    ];
    for (words, tag) in classes {
        for word in *words {
            map.insert(*word, *tag);
        }
    }
    for (word, tag) in AUXILIARIES {
        map.insert(*word, *tag);
    }
    map.insert("to", PosTag::To);
    map.insert("there", PosTag::Ex);
    map.insert("which", PosTag::Wdt);
    map
});

/// A deterministic part-of-speech tagger.
#[derive(Clone, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger.
    pub fn new() -> Self {
        PosTagger
    }

    /// Assign a tag to a single lowercase word.
    pub fn tag(&self, word: &str) -> PosTag {
        if let Some(tag) = CLOSED_CLASS.get(word) {
            return *tag;
        }

        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Cd;
        }
        if word.len() > 4 && word.ends_with("ing") {
            return PosTag::Vbg;
        }
        if word.len() > 3 && word.ends_with("ed") {
            return PosTag::Vbd;
        }
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Rb;
        }
        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return PosTag::Nns;
        }

        PosTag::Nn
    }

    /// Tag a sequence of words, preserving input order.
    pub fn tag_words(&self, words: &[String]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(word.as_str(), self.tag(word), position))
            .collect()
    }

    /// Get the name of this tagger.
    pub fn name(&self) -> &'static str {
        "rule_lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_words() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("i"), PosTag::Prp);
        assert_eq!(tagger.tag("my"), PosTag::PrpPoss);
        assert_eq!(tagger.tag("will"), PosTag::Md);
        assert_eq!(tagger.tag("am"), PosTag::Vbp);
        assert_eq!(tagger.tag("is"), PosTag::Vbz);
        assert_eq!(tagger.tag("was"), PosTag::Vbd);
        assert_eq!(tagger.tag("the"), PosTag::Dt);
        assert_eq!(tagger.tag("what"), PosTag::Wp);
        assert_eq!(tagger.tag("how"), PosTag::Wrb);
        assert_eq!(tagger.tag("yes"), PosTag::Uh);
        assert_eq!(tagger.tag("not"), PosTag::Rb);
    }

    #[test]
    fn test_irregular_verbs() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("went"), PosTag::Vbd);
        assert_eq!(tagger.tag("said"), PosTag::Vbd);
        assert_eq!(tagger.tag("eaten"), PosTag::Vbn);
        assert_eq!(tagger.tag("eat"), PosTag::Vbp);
        assert_eq!(tagger.tag("go"), PosTag::Vbp);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("eating"), PosTag::Vbg);
        assert_eq!(tagger.tag("walked"), PosTag::Vbd);
        assert_eq!(tagger.tag("quickly"), PosTag::Rb);
        assert_eq!(tagger.tag("books"), PosTag::Nns);
        assert_eq!(tagger.tag("42"), PosTag::Cd);
    }

    #[test]
    fn test_default_is_noun() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("rice"), PosTag::Nn);
        assert_eq!(tagger.tag("xyzabc"), PosTag::Nn);
        // short words are left alone by the plural rule
        assert_eq!(tagger.tag("bus"), PosTag::Nn);
        assert_eq!(tagger.tag("glass"), PosTag::Nn);
    }

    #[test]
    fn test_tag_words_preserves_order_and_positions() {
        let tagger = PosTagger::new();
        let words: Vec<String> = ["i", "am", "eating", "rice"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tokens = tagger.tag_words(&words);

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].tag, PosTag::Prp);
        assert_eq!(tokens[1].tag, PosTag::Vbp);
        assert_eq!(tokens[2].tag, PosTag::Vbg);
        assert_eq!(tokens[3].tag, PosTag::Nn);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
    }
}
