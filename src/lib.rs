/// This crate ranks documents by TF-IDF cosine similarity to a query.
pub mod vectorizer;
pub mod text;
pub mod config;
pub mod error;
pub mod utils;

/// TF-IDF Vectorizer
/// Fitted once on a corpus, then used to vectorize every document and query
/// of that corpus.
///
/// Internally, it holds:
/// - The corpus vocabulary (term -> index, first-seen order)
/// - The document frequency of every term
/// - An IDF vector cache
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: float type of the produced vectors (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The vectorizer is immutable after construction and can be shared between
/// threads. Queries never alter the vocabulary or document frequencies.
pub use vectorizer::TFIDFVectorizer;

/// Dense TF-IDF vector
/// One weight per vocabulary term, L2-normalized, or all zeros when no
/// in-vocabulary term was present.
pub use vectorizer::TFIDFVector;

/// Corpus for TF-IDF Vectorizer
/// Vocabulary and document-frequency table built once from the token
/// streams of all documents.
/// It is used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::{Corpus, CorpusBuilder};

/// Token Frequency structure
/// Counts token occurrences within one token stream.
/// Used as base data for TF (Term Frequency) calculation.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// Provided engines:
/// - `DefaultTFIDFEngine`: raw count TF, smoothed IDF `ln((1+N)/(1+df)) + 1`
/// - `SublinearTFIDFEngine`: `1 + ln(count)` TF, same IDF
pub use vectorizer::tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine, TFIDFEngine};

/// Similarity ranking
/// - `cosine_similarity`: cosine of two equal-length vectors
/// - `rank`: scores every document vector against a query, stable descending order
/// - `Hits` / `HitEntry`: ranked (document id, score) list
pub use vectorizer::evaluate::scoring::{cosine_similarity, rank, HitEntry, Hits, COSINE_EPSILON};

/// Document Index
/// Fit-once, search-many driver over raw texts or token streams.
pub use vectorizer::index::DocumentIndex;

/// Text analysis: tokenizer, stopwords and the analyzer combining them
pub use text::{Analyzer, StopWords};

pub use config::{SearchConfig, StopWordSource, Weighting};
pub use error::{Error, ErrorKind, Result};
