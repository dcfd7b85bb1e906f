//! Text analysis feeding the vectorizer: word and sentence splitting,
//! lowercasing and stopword removal.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tokenizer::{tokenize_sentences, tokenize_words};

use crate::vectorizer::token::TokenFrequency;

/// Turns raw text into the normalized token stream the vectorizer consumes.
/// Documents and queries must go through the same analyzer.
#[derive(Debug, Clone)]
pub struct Analyzer {
    /// lowercase tokens before anything else
    pub lowercase: bool,
    /// tokens shorter than this many chars are dropped
    pub min_token_len: usize,
    pub stopwords: StopWords,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_len: 1,
            stopwords: StopWords::english(),
        }
    }
}

impl Analyzer {
    /// Lowercasing analyzer with the English stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercasing analyzer that keeps every token
    pub fn without_stopwords() -> Self {
        Self {
            stopwords: StopWords::empty(),
            ..Self::default()
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Normalized tokens of `text`, in order
    pub fn analyze(&self, text: &str) -> Vec<String> {
        tokenize_words(text)
            .into_iter()
            .map(|token| if self.lowercase { token.to_lowercase() } else { token })
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }

    /// Token counts of `text` after analysis
    pub fn analyze_freq(&self, text: &str) -> TokenFrequency {
        TokenFrequency::from_tokens(&self.analyze(text))
    }
}
