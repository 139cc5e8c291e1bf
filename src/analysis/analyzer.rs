//! Linguistic analyzer combining sanitization, tokenization, tagging, and
//! tense inference.
//!
//! # Examples
//!
//! ```
//! use signwave::analysis::analyzer::LinguisticAnalyzer;
//! use signwave::analysis::tense::Tense;
//!
//! let analyzer = LinguisticAnalyzer::new().unwrap();
//! let analysis = analyzer.analyze("I am eating rice!");
//!
//! assert_eq!(analysis.text, "i am eating rice");
//! assert_eq!(analysis.tokens.len(), 4);
//! assert_eq!(analysis.tense, Tense::PresentContinuous);
//! ```

use crate::analysis::sanitize::Sanitizer;
use crate::analysis::tagger::PosTagger;
use crate::analysis::tense::{Tense, TenseVote};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// The result of analyzing one sentence.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Sanitized, lowercased input text
    pub text: String,
    /// Tagged tokens in input order
    pub tokens: Vec<Token>,
    /// Probable tense from the vote over all tags
    pub tense: Tense,
}

/// Composes the analysis stages into one pass.
///
/// Sanitized text that comes out empty is not an error; the analysis simply
/// carries no tokens and defaults to the present tense.
#[derive(Clone, Debug)]
pub struct LinguisticAnalyzer {
    sanitizer: Sanitizer,
    tokenizer: WordTokenizer,
    tagger: PosTagger,
}

impl LinguisticAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Result<Self> {
        Ok(LinguisticAnalyzer {
            sanitizer: Sanitizer::new()?,
            tokenizer: WordTokenizer::new(),
            tagger: PosTagger::new(),
        })
    }

    /// Analyze raw text into tagged tokens and a probable tense.
    pub fn analyze(&self, text: &str) -> Analysis {
        let text = self.sanitizer.sanitize(text);
        let words = self.tokenizer.tokenize(&text);
        let tokens = self.tagger.tag_words(&words);
        let tense = TenseVote::from_tokens(&tokens).probable();
        Analysis {
            text,
            tokens,
            tense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::PosTag;

    #[test]
    fn test_analyze_tags_and_tense() {
        let analyzer = LinguisticAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("He will go.");

        assert_eq!(analysis.text, "he will go");
        let tags: Vec<PosTag> = analysis.tokens.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![PosTag::Prp, PosTag::Md, PosTag::Vbp]);
        assert_eq!(analysis.tense, Tense::Future);
    }

    #[test]
    fn test_pure_punctuation_proceeds() {
        let analyzer = LinguisticAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("!!! ??? ...");

        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.tense, Tense::Present);
    }

    #[test]
    fn test_modal_and_past_yields_future() {
        let analyzer = LinguisticAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("she said she will go");
        assert_eq!(analysis.tense, Tense::Future);
    }
}
