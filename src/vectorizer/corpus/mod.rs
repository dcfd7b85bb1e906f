use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::token::TokenFrequency;

/// Vocabulary and document frequencies of a fixed corpus.
///
/// Term indices follow first-seen order across the documents, and the
/// value stored for each term is the number of documents containing it.
/// Built once, then only read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    /// number of documents the corpus was built from
    doc_num: u64,
    /// term -> document frequency, position is the term index
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Build from the token streams of every document.
    ///
    /// # Arguments
    /// * `streams` - one token stream per document, in corpus order
    ///
    /// # Errors
    /// `Error::EmptyCorpus` if `streams` is empty
    pub fn build<T, S>(streams: &[T]) -> Result<Self>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = CorpusBuilder::new();
        for stream in streams {
            builder.add_stream(stream.as_ref());
        }
        builder.finish()
    }

    /// Build from per-document token counts.
    pub fn from_frequencies(freqs: &[TokenFrequency]) -> Result<Self> {
        let mut builder = CorpusBuilder::new();
        for freq in freqs {
            builder.add_set(&freq.token_set_ref_str());
        }
        builder.finish()
    }

    /// Number of documents
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.term_counts.get_index(idx).map(|(term, _)| term.as_ref())
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_counts.contains_key(term)
    }

    /// Document frequency by term index, 0 when out of range
    #[inline]
    pub fn doc_freq(&self, idx: usize) -> u64 {
        self.term_counts.get_index(idx).map_or(0, |(_, &df)| df)
    }

    /// Document frequency by term, 0 for unseen terms
    #[inline]
    pub fn doc_freq_of(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Terms in index order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(|term| term.as_ref())
    }

    /// (term, document frequency) in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &df)| (term.as_ref(), df))
    }
}

/// Accumulates documents before the vocabulary is frozen into a [`Corpus`].
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    doc_num: u64,
    term_counts: IndexMap<Box<str>, u64>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document given as a token stream.
    /// Repeated tokens count once toward document frequency.
    pub fn add_stream<S>(&mut self, stream: &[S]) -> &mut Self
    where
        S: AsRef<str>,
    {
        let freq = TokenFrequency::from_tokens(stream);
        self.add_set(&freq.token_set_ref_str())
    }

    /// Add one document given as its set of distinct terms.
    pub fn add_set<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            if let Some(count) = self.term_counts.get_mut(term.as_ref()) {
                *count += 1;
            } else {
                self.term_counts.insert(term.as_ref().into(), 1);
            }
        }
        self
    }

    pub fn finish(self) -> Result<Corpus> {
        if self.doc_num == 0 {
            return Err(Error::EmptyCorpus);
        }
        debug!(
            "corpus built: {} documents, {} terms",
            self.doc_num,
            self.term_counts.len()
        );
        Ok(Corpus {
            doc_num: self.doc_num,
            term_counts: self.term_counts,
        })
    }
}
