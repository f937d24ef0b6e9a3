//! Error types for the retrieval engine.

use thiserror::Error;

/// Errors surfaced to callers of [`crate::TFIDF`].
///
/// Out-of-vocabulary words are not errors; they are recovered locally by the
/// smoothing and ignore rules of each query. Zero denominators are guarded
/// in place and never reach this type either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// The engine was constructed from a corpus with no documents
    #[error("corpus is empty")]
    EmptyCorpus,
    /// A caller contract was violated, e.g. both or neither of name/doc given
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A document name that is not part of the trained corpus
    #[error("unknown document: {0}")]
    UnknownDocument(String),
    /// Two documents in the corpus share a name
    #[error("duplicate document name in corpus: {0}")]
    DuplicateDocument(String),
    /// Summarization needs the document's sentences, which the matrix does not keep
    #[error("sentences unavailable for document {0}; pass the Document itself")]
    SentencesUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
