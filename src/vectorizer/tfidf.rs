use crate::vectorizer::{corpus::Corpus, token::TokenFrequency};

/// TF-IDF calculation engine
/// Plug a different engine into `TFIDFVectorizer<N, E>` to change the
/// weighting formula. The same engine is applied to corpus documents and
/// to queries, so their scores stay comparable.
pub trait TFIDFEngine {
    /// Term frequency weight from a raw in-document count.
    /// Must return 0 for a count of 0.
    fn tf(count: u32) -> f64;

    /// Inverse document frequency of a term.
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// IDF for every vocabulary index of the corpus
    ///
    /// # Returns
    /// * `Vec<f64>` - IDF vector, index-aligned with the vocabulary
    fn idf_vec(corpus: &Corpus) -> Vec<f64> {
        let doc_num = corpus.doc_num();
        corpus
            .iter()
            .map(|(_, doc_freq)| Self::idf(doc_num, doc_freq))
            .collect()
    }

    /// Dense TF vector of `freq` over the corpus vocabulary.
    /// Out-of-vocabulary tokens are dropped.
    fn tf_vec(freq: &TokenFrequency, corpus: &Corpus) -> Vec<f64> {
        let mut tf_vec = vec![0.0; corpus.vocab_size()];
        for (token, count) in freq.iter() {
            if let Some(idx) = corpus.term_index(token) {
                tf_vec[idx] = Self::tf(count);
            }
        }
        tf_vec
    }
}

/// Smoothed IDF shared by the built-in engines: `ln((1 + N) / (1 + df)) + 1`.
/// Never below 1, so a term present in every document still carries weight.
#[inline]
pub fn smoothed_idf(doc_num: u64, doc_freq: u64) -> f64 {
    ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Default TF-IDF engine
/// raw count TF, smoothed IDF
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        smoothed_idf(doc_num, doc_freq)
    }
}

/// Sublinear TF engine
/// `1 + ln(count)` TF, smoothed IDF. Dampens documents that repeat a term.
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        if count == 0 {
            0.0
        } else {
            1.0 + (count as f64).ln()
        }
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        smoothed_idf(doc_num, doc_freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_minimum_is_one() {
        assert_eq!(smoothed_idf(1, 1), 1.0);
        assert_eq!(smoothed_idf(10, 10), 1.0);
    }

    #[test]
    fn idf_decreases_with_doc_freq() {
        let rare = smoothed_idf(10, 1);
        let common = smoothed_idf(10, 5);
        assert!(rare > common);
        assert!(common > smoothed_idf(10, 10));
    }

    #[test]
    fn tf_variants() {
        assert_eq!(DefaultTFIDFEngine::tf(0), 0.0);
        assert_eq!(DefaultTFIDFEngine::tf(3), 3.0);
        assert_eq!(SublinearTFIDFEngine::tf(0), 0.0);
        assert_eq!(SublinearTFIDFEngine::tf(1), 1.0);
        assert!((SublinearTFIDFEngine::tf(3) - (1.0 + 3f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn tf_vec_ignores_unknown_tokens() {
        let corpus = Corpus::build(&[vec!["a", "b"]]).unwrap();
        let freq = TokenFrequency::from_tokens(&["b", "b", "zzz"]);
        let tf = DefaultTFIDFEngine::tf_vec(&freq, &corpus);
        assert_eq!(tf, vec![0.0, 2.0]);
    }

    #[test]
    fn idf_vec_is_index_aligned() {
        let corpus = Corpus::build(&[vec!["a", "b"], vec!["a"]]).unwrap();
        let idf = DefaultTFIDFEngine::idf_vec(&corpus);
        assert_eq!(idf.len(), 2);
        assert_eq!(idf[0], 1.0);
        assert!((idf[1] - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }
}
