pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod evaluate;
pub mod index;

use std::marker::PhantomData;
use std::ops::Index;

use log::{debug, trace};
use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::math::vector::{from_f64, l2_normalize, norm, to_f64};
use crate::vectorizer::{corpus::Corpus, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, token::TokenFrequency};

/// Fitted TF-IDF vectorizer.
///
/// Owns the corpus statistics and the IDF cache derived from them. Once
/// constructed it is only read, so one instance can be shared across
/// threads and reused for every document and query of the corpus.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Send + Sync,
    E: TFIDFEngine + Send + Sync,
{
    /// Corpus statistics the vectorizer was fitted on
    corpus: Corpus,
    /// IDF Vector
    idf_cache: IDFVector,
    _marker: PhantomData<(N, E)>,
}

/// IDF weights cached at fit time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IDFVector {
    /// IDF per vocabulary index, dense because every index has a weight
    pub idf_vec: Vec<f64>,
    /// document count the weights were computed for
    pub doc_num: u64,
}

/// Dense, L2-normalized TF-IDF vector over a fixed vocabulary.
/// Either unit length or all zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TFIDFVector<N = f64> {
    values: Vec<N>,
}

impl<N> TFIDFVector<N>
where
    N: Float,
{
    pub fn zeros(len: usize) -> Self {
        Self { values: vec![N::zero(); len] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.values
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        norm(&self.values)
    }

    /// True when no in-vocabulary term contributed weight
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// (index, weight) of the non-zero entries
    pub fn non_zero(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(idx, &v)| (idx, v))
    }
}

impl<N> Index<usize> for TFIDFVector<N> {
    type Output = N;

    fn index(&self, idx: usize) -> &N {
        &self.values[idx]
    }
}

impl<N> AsRef<[N]> for TFIDFVector<N> {
    fn as_ref(&self) -> &[N] {
        &self.values
    }
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine + Send + Sync,
{
    /// Fit on an already built corpus
    pub fn new(corpus: Corpus) -> Self {
        let idf_cache = IDFVector {
            idf_vec: E::idf_vec(&corpus),
            doc_num: corpus.doc_num(),
        };
        debug!(
            "vectorizer fitted: {} documents, {} dimensions",
            idf_cache.doc_num,
            idf_cache.idf_vec.len()
        );
        Self {
            corpus,
            idf_cache,
            _marker: PhantomData,
        }
    }

    /// Build the corpus from token streams and fit on it
    ///
    /// # Errors
    /// `Error::EmptyCorpus` if `streams` is empty
    pub fn fit<T, S>(streams: &[T]) -> Result<Self>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Self::new(Corpus::build(streams)?))
    }

    /// Fit and vectorize the training streams in one go
    pub fn fit_transform<T, S>(streams: &[T]) -> Result<(Self, Vec<TFIDFVector<N>>)>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        let vectorizer = Self::fit(streams)?;
        let vectors = vectorizer.transform_batch(streams);
        Ok((vectorizer, vectors))
    }

    /// Vectorize one token stream against the fitted vocabulary
    pub fn transform<S>(&self, tokens: &[S]) -> TFIDFVector<N>
    where
        S: AsRef<str>,
    {
        self.transform_freq(&TokenFrequency::from_tokens(tokens))
    }

    /// Vectorize precomputed token counts
    pub fn transform_freq(&self, freq: &TokenFrequency) -> TFIDFVector<N> {
        let mut weights = E::tf_vec(freq, &self.corpus);
        weights
            .iter_mut()
            .zip(self.idf_cache.idf_vec.iter())
            .for_each(|(w, idf)| *w *= idf);
        let raw_norm = l2_normalize(&mut weights);
        trace!(
            "vectorized {} tokens, {} in vocabulary, raw norm {:.6}",
            freq.token_sum(),
            weights.iter().filter(|w| **w != 0.0).count(),
            raw_norm
        );
        TFIDFVector {
            values: weights.into_iter().map(from_f64).collect(),
        }
    }

    /// Vectorize many streams in parallel.
    /// Output is index-aligned with `streams`.
    pub fn transform_batch<T, S>(&self, streams: &[T]) -> Vec<TFIDFVector<N>>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        streams
            .par_iter()
            .map(|stream| self.transform(stream.as_ref()))
            .collect()
    }

    /// Vectorize many precomputed token counts in parallel
    pub fn transform_freq_batch(&self, freqs: &[TokenFrequency]) -> Vec<TFIDFVector<N>> {
        freqs.par_iter().map(|freq| self.transform_freq(freq)).collect()
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Dimension of every vector this vectorizer produces
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// IDF of a vocabulary index
    #[inline]
    pub fn idf(&self, idx: usize) -> Option<f64> {
        self.idf_cache.idf_vec.get(idx).copied()
    }

    /// IDF of a term, None for out-of-vocabulary terms
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.corpus.term_index(term).and_then(|idx| self.idf(idx))
    }

    #[inline]
    pub fn idf_vec(&self) -> &IDFVector {
        &self.idf_cache
    }

    /// Heaviest terms of a vector, descending, for inspection
    pub fn top_terms<'a>(&'a self, vector: &TFIDFVector<N>, k: usize) -> Vec<(&'a str, f64)> {
        let mut terms: Vec<(&str, f64)> = vector
            .non_zero()
            .filter_map(|(idx, w)| self.corpus.term(idx).map(|t| (t, to_f64(w))))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms.truncate(k);
        terms
    }
}
