use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Default English list
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Case-insensitive set of words to drop during analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// No stopwords at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::empty();
        for word in words {
            stopwords.insert(word.as_ref());
        }
        stopwords
    }

    /// Parse a list separated by whitespace or newlines.
    /// Text after `#` on a line is a comment.
    pub fn parse(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(|line| line.split('#').next().unwrap_or(""))
                .flat_map(str::split_whitespace),
        )
    }

    /// Load a list file, see [`StopWords::parse`] for the format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let list = fs::read_to_string(path.as_ref())?;
        let stopwords = Self::parse(&list);
        debug!("loaded {} stopwords from {}", stopwords.len(), path.as_ref().display());
        Ok(stopwords)
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // stored words are lowercase, so only mixed-case input needs folding
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
