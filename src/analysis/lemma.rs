//! Mode-keyed rule lemmatizer.
//!
//! Reduces words to their dictionary base form using per-mode irregular-form
//! tables and suffix-detachment rules with undoubling ("running" → "run")
//! and e-restoration ("coming" → "come"). The mode is selected from the
//! part-of-speech tag by [`LemmaMode::for_tag`], keeping the dispatch policy
//! auditable separately from the detachment rules.
//!
//! Candidates are not validated against a dictionary, so the output is
//! best-effort; a miss leaves the word unchanged or mildly over-stripped,
//! which downstream clip resolution tolerates.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::lemma::{LemmaMode, Lemmatizer};
//!
//! let lemmatizer = Lemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("eating", LemmaMode::Verb), "eat");
//! assert_eq!(lemmatizer.lemmatize("coming", LemmaMode::Verb), "come");
//! assert_eq!(lemmatizer.lemmatize("books", LemmaMode::Noun), "book");
//! assert_eq!(lemmatizer.lemmatize("better", LemmaMode::Adjective), "good");
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::token::PosTag;

/// Lemmatization mode, selected per token from its POS tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LemmaMode {
    Verb,
    Noun,
    Adjective,
    /// Behaves as noun mode.
    Default,
}

impl LemmaMode {
    /// Mode-selection policy.
    ///
    /// Gerund, past, 3rd-person present, and past participle tags get verb
    /// mode; singular nouns get noun mode; adjective and comparative /
    /// superlative adverb tags get adjective mode; everything else
    /// (including VB and VBP) gets the default mode.
    pub fn for_tag(tag: PosTag) -> Self {
        match tag {
            PosTag::Vbg | PosTag::Vbd | PosTag::Vbz | PosTag::Vbn => LemmaMode::Verb,
            PosTag::Nn => LemmaMode::Noun,
            PosTag::Jj | PosTag::Jjr | PosTag::Jjs | PosTag::Rbr | PosTag::Rbs => {
                LemmaMode::Adjective
            }
            _ => LemmaMode::Default,
        }
    }
}

/// Irregular verb forms mapped to their base form.
static VERB_EXCEPTIONS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("said", "say"),
        ("made", "make"),
        ("got", "get"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("saw", "see"),
        ("seen", "see"),
        ("seeing", "see"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("came", "come"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("knew", "know"),
        ("known", "know"),
        ("heard", "hear"),
        ("told", "tell"),
        ("thought", "think"),
        ("felt", "feel"),
        ("found", "find"),
        ("left", "leave"),
        ("kept", "keep"),
        ("ran", "run"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("wrote", "write"),
        ("written", "write"),
        ("drank", "drink"),
        ("drunk", "drink"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("taught", "teach"),
        ("caught", "catch"),
        ("fought", "fight"),
        ("slept", "sleep"),
        ("met", "meet"),
        ("paid", "pay"),
        ("sent", "send"),
        ("built", "build"),
        ("lost", "lose"),
        ("won", "win"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("threw", "throw"),
        ("thrown", "throw"),
        ("broke", "break"),
        ("broken", "break"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("woke", "wake"),
        ("woken", "wake"),
        ("began", "begin"),
        ("begun", "begin"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("held", "hold"),
        ("led", "lead"),
        ("became", "become"),
        ("becoming", "become"),
        ("understood", "understand"),
    ];
    pairs.iter().copied().collect()
});

/// Irregular noun plurals mapped to their singular form.
static NOUN_EXCEPTIONS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("loaves", "loaf"),
        ("shelves", "shelf"),
        ("wolves", "wolf"),
        ("movies", "movie"),
        ("shoes", "shoe"),
        ("buses", "bus"),
    ];
    pairs.iter().copied().collect()
});

/// Comparative and superlative forms with suppletive bases.
static ADJECTIVE_EXCEPTIONS: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let pairs: &[(&str, &str)] = &[
            ("better", "good"),
            ("best", "good"),
            ("worse", "bad"),
            ("worst", "bad"),
            ("further", "far"),
            ("furthest", "far"),
            ("farther", "far"),
            ("farthest", "far"),
        ];
        pairs.iter().copied().collect()
    });

/// Nouns whose final `s` is not a plural marker.
const INVARIANT_NOUNS: &[&str] = &["news", "series", "species", "physics", "mathematics"];

/// A rule-based lemmatizer with verb, noun, and adjective modes.
#[derive(Clone, Debug, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        Lemmatizer
    }

    /// Lemmatize a lowercase word in the given mode.
    pub fn lemmatize(&self, word: &str, mode: LemmaMode) -> String {
        match mode {
            LemmaMode::Verb => verb_lemma(word),
            LemmaMode::Adjective => adjective_lemma(word),
            LemmaMode::Noun | LemmaMode::Default => noun_lemma(word),
        }
    }

    /// Get the name of this lemmatizer.
    pub fn name(&self) -> &'static str {
        "rule_lemma"
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(base) = VERB_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }

    if word.len() > 4 && word.ends_with("ing") {
        return restore_stem(&word[..word.len() - 3]);
    }
    if word.len() > 4 && word.ends_with("ied") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if word.len() > 3 && word.ends_with("ed") {
        let rest = &word[..word.len() - 2];
        if rest.len() < 3 {
            // keep the stem's final e: "used" -> "use", "died" -> "die"
            return word[..word.len() - 1].to_string();
        }
        return restore_stem(rest);
    }
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ends_with_any(word, &["ches", "shes", "sses", "xes", "zes", "oes"]) {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 3 && word.ends_with("es") {
        return word[..word.len() - 1].to_string();
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

fn noun_lemma(word: &str) -> String {
    if INVARIANT_NOUNS.contains(&word) {
        return word.to_string();
    }
    if let Some(singular) = NOUN_EXCEPTIONS.get(word) {
        return (*singular).to_string();
    }

    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ends_with_any(word, &["sses", "ches", "shes", "xes", "zes"]) {
        return word[..word.len() - 2].to_string();
    }
    if word.len() >= 4 && word.ends_with("oes") {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 3 && word.ends_with("es") {
        return word[..word.len() - 1].to_string();
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
        && !is_vowel(word.as_bytes()[word.len() - 2] as char)
    {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

fn adjective_lemma(word: &str) -> String {
    if let Some(base) = ADJECTIVE_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }

    if word.len() > 5 && word.ends_with("iest") {
        return format!("{}y", &word[..word.len() - 4]);
    }
    if word.len() > 4 && word.ends_with("ier") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if word.len() > 4 && word.ends_with("est") {
        return restore_stem(&word[..word.len() - 3]);
    }
    if word.len() > 3 && word.ends_with("er") {
        return restore_stem(&word[..word.len() - 2]);
    }

    word.to_string()
}

/// Repair a stem after suffix detachment: undouble a final consonant
/// ("runn" -> "run") or restore a dropped final e ("com" -> "come").
fn restore_stem(rest: &str) -> String {
    let chars: Vec<char> = rest.chars().collect();
    let n = chars.len();

    if n >= 2 {
        let last = chars[n - 1];
        if last == chars[n - 2] && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z' | 'f') {
            return rest[..rest.len() - 1].to_string();
        }
    }

    // e-restoration only for single-syllable CVC stems; polysyllabic stems
    // like "visit" or "happen" take a bare suffix
    if vowel_group_count(&chars) == 1 && ends_cvc(&chars) {
        return format!("{rest}e");
    }

    rest.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn vowel_group_count(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &c in chars {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let last = chars[n - 1];
    !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y')
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 3])
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}
