use log::debug;
use num::Float;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::text::Analyzer;
use crate::vectorizer::evaluate::scoring::{rank, Hits};
use crate::vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
use crate::vectorizer::{TFIDFVector, TFIDFVectorizer};

/// Searchable corpus: the fitted vectorizer plus one precomputed vector
/// per document. Document ids are positions in the input.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{Analyzer, DocumentIndex};
///
/// let index: DocumentIndex = DocumentIndex::build(
///     &["the cat sat", "the dog sat", "the cat ran"],
///     Analyzer::without_stopwords(),
/// ).unwrap();
/// let hits = index.search("cat sat").unwrap();
/// assert_eq!(hits.list[0].doc_id, 0);
/// // "the dog sat" and "the cat ran" match the query symmetrically
/// assert_eq!(hits.list[1].score, hits.list[2].score);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentIndex<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Send + Sync,
    E: TFIDFEngine + Send + Sync,
{
    vectorizer: TFIDFVectorizer<N, E>,
    vectors: Vec<TFIDFVector<N>>,
    /// raw text per document, empty when built from token streams
    texts: Vec<String>,
    analyzer: Analyzer,
}

impl<N, E> DocumentIndex<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine + Send + Sync,
{
    /// Analyze, fit and vectorize raw documents.
    /// Queries are later analyzed with the same `analyzer`.
    ///
    /// # Errors
    /// `Error::EmptyCorpus` if `texts` is empty
    pub fn build<S>(texts: &[S], analyzer: Analyzer) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let streams: Vec<Vec<String>> = texts
            .par_iter()
            .map(|text| analyzer.analyze(text.as_ref()))
            .collect();
        let mut index = Self::from_parts(&streams, analyzer)?;
        index.texts = texts.iter().map(|t| t.as_ref().to_string()).collect();
        Ok(index)
    }

    /// Fit on already normalized token streams.
    /// Text queries are split and lowercased without stopword removal.
    pub fn from_token_streams<T, S>(streams: &[T]) -> Result<Self>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        Self::from_parts(streams, Analyzer::without_stopwords())
    }

    fn from_parts<T, S>(streams: &[T], analyzer: Analyzer) -> Result<Self>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        let (vectorizer, vectors) = TFIDFVectorizer::fit_transform(streams)?;
        debug!(
            "document index built: {} documents, {} dimensions",
            vectors.len(),
            vectorizer.vocab_size()
        );
        Ok(Self {
            vectorizer,
            vectors,
            texts: Vec::new(),
            analyzer,
        })
    }

    /// Rank every document against a free-text query
    pub fn search(&self, query: &str) -> Result<Hits> {
        self.search_tokens(&self.analyzer.analyze(query))
    }

    /// Rank every document against an already normalized query
    pub fn search_tokens<S>(&self, tokens: &[S]) -> Result<Hits>
    where
        S: AsRef<str>,
    {
        let query = self.vectorizer.transform(tokens);
        if query.is_zero() {
            debug!("query has no in-vocabulary terms");
        }
        self.search_vector(&query)
    }

    /// Rank every document against a query vector
    ///
    /// # Errors
    /// `Error::DimensionMismatch` if `query` came from another vectorizer
    pub fn search_vector(&self, query: &TFIDFVector<N>) -> Result<Hits> {
        if query.len() != self.vectorizer.vocab_size() {
            return Err(Error::DimensionMismatch {
                expected: self.vectorizer.vocab_size(),
                found: query.len(),
            });
        }
        rank(query.as_slice(), &self.vectors)
    }

    /// [`search`](Self::search) truncated to the best `k` hits
    pub fn search_top_k(&self, query: &str, k: usize) -> Result<Hits> {
        Ok(self.search(query)?.top_k(k))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Raw text of a document, if the index was built from text
    pub fn text(&self, doc_id: usize) -> Option<&str> {
        self.texts.get(doc_id).map(String::as_str)
    }

    pub fn vector(&self, doc_id: usize) -> Option<&TFIDFVector<N>> {
        self.vectors.get(doc_id)
    }

    pub fn vectorizer(&self) -> &TFIDFVectorizer<N, E> {
        &self.vectorizer
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::vectorizer::tfidf::SublinearTFIDFEngine;

    const DOCS: [&str; 4] = [
        "Machine learning lets computers learn patterns from data.",
        "Cooking pasta needs salted boiling water.",
        "Deep learning is a branch of machine learning.",
        "Fresh water is essential for life.",
    ];

    fn index() -> DocumentIndex {
        DocumentIndex::build(&DOCS, Analyzer::new()).unwrap()
    }

    #[test]
    fn finds_relevant_documents_first() {
        let hits = index().search("machine learning").unwrap();
        assert_eq!(hits.len(), DOCS.len());
        let top: Vec<usize> = hits.doc_ids()[..2].to_vec();
        assert!(top.contains(&0) && top.contains(&2));
        assert_eq!(hits.list[2].score, 0.0);
    }

    #[test]
    fn keeps_texts() {
        let index = index();
        assert_eq!(index.len(), 4);
        assert_eq!(index.text(1), Some(DOCS[1]));
        assert_eq!(index.text(9), None);
        assert_eq!(index.vector(0).map(|v| v.len()), Some(index.vectorizer().vocab_size()));
    }

    #[test]
    fn stopword_only_query_scores_zero_in_order() {
        let hits = index().search("the of and").unwrap();
        assert_eq!(hits.doc_ids(), vec![0, 1, 2, 3]);
        assert!(hits.iter().all(|hit| hit.score == 0.0));
    }

    #[test]
    fn stopword_only_corpus_scores_positive_zero() {
        let index: DocumentIndex = DocumentIndex::build(&["the of", "and the"], Analyzer::new()).unwrap();
        assert_eq!(index.vectorizer().vocab_size(), 0);
        let hits = index.search("anything").unwrap();
        assert_eq!(hits.doc_ids(), vec![0, 1]);
        for hit in &hits {
            assert_eq!(hit.score, 0.0);
            assert!(!hit.score.is_sign_negative());
        }
        assert_eq!(hits.to_string(), "Doc 0 -> 0.0000\nDoc 1 -> 0.0000\n");
    }

    #[test]
    fn top_k() {
        let hits = index().search_top_k("water", 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert!([1, 3].contains(&hits.list[0].doc_id));
    }

    #[test]
    fn empty_corpus_fails_to_build() {
        let docs: [&str; 0] = [];
        let err = DocumentIndex::<f64>::build(&docs, Analyzer::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCorpus);
    }

    #[test]
    fn foreign_vector_is_rejected() {
        let index = index();
        let err = index.search_vector(&TFIDFVector::zeros(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn from_token_streams_with_other_engine() {
        let index: DocumentIndex<f32, SublinearTFIDFEngine> =
            DocumentIndex::from_token_streams(&[vec!["red", "apple"], vec!["green", "apple"]]).unwrap();
        assert_eq!(index.text(0), None);
        assert_eq!(index.search("Red").unwrap().doc_ids(), vec![0, 1]);
    }
}
