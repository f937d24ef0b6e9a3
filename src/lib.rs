//! This crate is an in-memory Information Retrieval Engine built on a term-document matrix.
pub mod config;
pub mod document;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Retrieval Engine
/// The top-level struct of this crate. It is built once from a corpus and
/// answers queries against the fixed matrix.
///
/// Internally, it holds:
/// - The document vocabulary (name <-> column id)
/// - The word vocabulary (token <-> row id)
/// - The dense term-document count matrix, with cached document lengths and
///   document frequencies
///
/// Queries:
/// - `keywords`: top tf-idf words of a trained or ad-hoc document
/// - `search_docs`: documents ranked against a keyword list
/// - `similar_docs`: documents ranked by keyword-vector cosine similarity
/// - `summarize`: one sentence per keyword, extractive
///
/// `TFIDF<E>` takes the weighting engine as a type parameter
/// (`DefaultTFIDFEngine` unless stated otherwise).
///
/// # Thread Safety
/// All queries take `&self` and the matrix is never mutated after
/// construction, so the engine can be shared behind an `Arc`.
pub use vectorizer::TFIDF;

/// Document abstraction produced by the corpus loader, and the reference type
/// that selects either a trained document by name or an ad-hoc document.
pub use document::{DocRef, Document};

/// Error type and result alias
pub use error::{Result, RetrievalError};

/// Engine configuration (id assignment order, OOV document frequency)
pub use config::{EngineConfig, IdOrder};

/// TF IDF Calculation Engine Trait
/// Implement it to plug a different weighting into `TFIDF<E>`.
/// `DefaultTFIDFEngine` computes `count / total * ln(N / df)`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term frequency counter for documents outside the matrix
pub use vectorizer::token::TokenFrequency;

/// Vocabulary bijection and the count matrix
pub use vectorizer::{matrix::TermDocMatrix, vocab::Vocabulary};

/// Search Hits and Hit Entry structures
/// - `Hits`: a ranked list of documents with scores
/// - `HitEntry`: one document name, its score and token count
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Precomputed keywords for repeated similar-document queries
pub use vectorizer::evaluate::similar::KeywordIndex;

/// Sentence selection rule used by summarization
pub use vectorizer::evaluate::summarize::select_sentences;
