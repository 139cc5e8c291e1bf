//! End-to-end tests for the sentence-to-animation pipeline.

use std::sync::Arc;

use signwave::analysis::tense::Tense;
use signwave::clip::{ClipStore, DirectoryClipStore, MemoryClipStore};
use signwave::lexicon::Lexicon;
use signwave::pipeline::TranslationPipeline;
use signwave::sequencer::AnimationToken;
use signwave::synset::SynsetDictionary;

fn pipeline(
    clips: MemoryClipStore,
    lexicon: Lexicon,
    synsets: SynsetDictionary,
) -> TranslationPipeline {
    TranslationPipeline::new(Arc::new(lexicon), Arc::new(synsets), Arc::new(clips)).unwrap()
}

fn token_texts(tokens: &[AnimationToken]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn eating_rice_is_present_continuous() {
    let p = pipeline(
        MemoryClipStore::from_words(["me", "eat", "rice"]),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let translation = p.translate("I am eating rice").unwrap();

    assert_eq!(translation.tense, Tense::PresentContinuous);
    assert_eq!(translation.words, vec!["me", "eat", "rice"]);
    assert_eq!(token_texts(&translation.tokens), vec!["me", "eat", "rice"]);
    assert!(translation.synonyms.is_empty());
}

#[test]
fn modal_keeps_will_and_yields_future() {
    let p = pipeline(
        MemoryClipStore::from_words(["he", "will", "go"]),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let translation = p.translate("He will go").unwrap();

    // "will" is on the essential-word allow-list, so it survives filtering
    assert_eq!(translation.tense, Tense::Future);
    assert_eq!(translation.words, vec!["he", "will", "go"]);
}

#[test]
fn modal_and_past_verb_always_yields_future() {
    let p = pipeline(
        MemoryClipStore::new(),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let translation = p.translate("she said she will go").unwrap();
    assert_eq!(translation.tense, Tense::Future);
}

#[test]
fn lexicon_synonym_is_substituted_and_recorded() {
    let p = pipeline(
        MemoryClipStore::from_words(["hello"]),
        Lexicon::from_entries([("hi", "hello")]),
        SynsetDictionary::new(),
    );

    let translation = p.translate("hi").unwrap();

    assert_eq!(token_texts(&translation.tokens), vec!["hello"]);
    assert_eq!(translation.synonyms["hi"], "hello");
}

#[test]
fn lexicon_wins_over_synsets() {
    let synsets =
        SynsetDictionary::from_groups(vec![vec!["howdy".to_string(), "hi".to_string()]]);
    let p = pipeline(
        MemoryClipStore::from_words(["hello", "howdy"]),
        Lexicon::from_entries([("hi", "hello")]),
        synsets,
    );

    let translation = p.translate("hi").unwrap();
    assert_eq!(token_texts(&translation.tokens), vec!["hello"]);
}

#[test]
fn direct_hit_never_records_a_synonym() {
    let p = pipeline(
        MemoryClipStore::from_words(["book"]),
        Lexicon::from_entries([("book", "novel")]),
        SynsetDictionary::new(),
    );

    let translation = p.translate("book").unwrap();

    assert_eq!(token_texts(&translation.tokens), vec!["book"]);
    assert!(translation.synonyms.is_empty());
}

#[test]
fn unknown_word_is_spelled_out_in_order() {
    let p = pipeline(
        MemoryClipStore::new(),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let translation = p.translate("xyzabc").unwrap();

    assert_eq!(translation.tokens.len(), 6);
    assert_eq!(
        token_texts(&translation.tokens),
        vec!["x", "y", "z", "a", "b", "c"]
    );
}

#[test]
fn pure_punctuation_proceeds_without_error() {
    let p = pipeline(
        MemoryClipStore::new(),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let translation = p.translate("!!! ??? ...").unwrap();

    assert!(translation.text.chars().all(char::is_whitespace));
    assert!(translation.words.is_empty());
    assert!(translation.tokens.is_empty());
}

#[test]
fn empty_input_gets_the_specific_message() {
    let p = pipeline(
        MemoryClipStore::new(),
        Lexicon::new(),
        SynsetDictionary::new(),
    );

    let err = p.translate("").unwrap_err();
    assert_eq!(err.user_message(), "No input text provided.");
}

#[test]
fn directory_clip_store_resolves_real_files() {
    let dir = tempfile::tempdir().unwrap();
    for word in ["me", "eat", "rice"] {
        std::fs::write(dir.path().join(format!("{word}.mp4")), b"").unwrap();
    }

    let clips = DirectoryClipStore::new(dir.path());
    assert!(clips.file_exists("rice.mp4"));

    let p = TranslationPipeline::new(
        Arc::new(Lexicon::new()),
        Arc::new(SynsetDictionary::new()),
        Arc::new(clips),
    )
    .unwrap();

    let translation = p.translate("I am eating rice").unwrap();
    assert_eq!(token_texts(&translation.tokens), vec!["me", "eat", "rice"]);
}

#[test]
fn degraded_lexicon_still_translates() {
    // a missing lexicon file degrades to empty; the pipeline keeps working
    let lexicon = Lexicon::load("/nonexistent/synonyms.json");
    assert!(lexicon.is_empty());

    let p = pipeline(
        MemoryClipStore::from_words(["me", "eat", "rice"]),
        lexicon,
        SynsetDictionary::new(),
    );

    let translation = p.translate("I am eating rice").unwrap();
    assert_eq!(translation.words, vec!["me", "eat", "rice"]);
}
