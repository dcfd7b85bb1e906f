use std::fmt;

/// Errors raised by corpus building, ranking and the configuration layer.
///
/// Zero-norm vectors are never an error: they vectorize to the zero vector
/// and score 0 against everything.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A corpus was built from zero documents.
    #[error("cannot build a corpus from zero documents")]
    EmptyCorpus,
    /// Two vectors that must share the vocabulary dimension did not.
    #[error("vector dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Reading a stopword list, document file or config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration was well-formed JSON but semantically invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Configuration or output JSON could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No documents to build from.
    EmptyCorpus,
    /// Caller misuse, e.g. pairing vectors from different vocabularies.
    InvalidInput,
    /// Underlying I/O failure.
    Io,
    /// Bad configuration.
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyCorpus => ErrorKind::EmptyCorpus,
            Error::DimensionMismatch { .. } => ErrorKind::InvalidInput,
            Error::Io(_) => ErrorKind::Io,
            Error::Config(_) | Error::Json(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::EmptyCorpus => "empty corpus",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::Io => "io",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
