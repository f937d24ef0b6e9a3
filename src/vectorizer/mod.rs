pub mod corpus;
pub mod evaluate;
pub mod keywords;
pub mod matrix;
pub mod tfidf;
pub mod token;
pub mod vocab;

use std::marker::PhantomData;

use tracing::info;

use crate::{
    config::EngineConfig,
    document::{DocRef, Document},
    error::{Result, RetrievalError},
    vectorizer::{
        corpus::{build_index, CorpusIndex},
        matrix::TermDocMatrix,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TokenFrequency,
        vocab::Vocabulary,
    },
};

/// Retrieval engine over a fixed term-document matrix.
///
/// Built once from a corpus; every query takes `&self` and nothing is
/// mutated afterwards, so a single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct TFIDF<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    /// document name <-> column id
    docs: Vocabulary,
    /// word token <-> row id
    words: Vocabulary,
    matrix: TermDocMatrix,
    config: EngineConfig,
    _marker: PhantomData<E>,
}

static_assertions::assert_impl_all!(TFIDF: Send, Sync);

/// Where the term counts of a query document come from
#[derive(Debug, Clone)]
pub(crate) enum TermProfile {
    /// a column of the matrix
    Trained { col: usize, total: u64 },
    /// a document outside the matrix
    AdHoc { freq: TokenFrequency },
}

impl TermProfile {
    #[inline]
    pub(crate) fn total(&self) -> u64 {
        match self {
            TermProfile::Trained { total, .. } => *total,
            TermProfile::AdHoc { freq } => freq.token_total_count(),
        }
    }
}

impl TFIDF<DefaultTFIDFEngine> {
    /// Build an engine with the default weighting and configuration
    pub fn new(corpus: &[Document]) -> Result<Self> {
        Self::with_config(corpus, EngineConfig::default())
    }
}

impl<E> TFIDF<E>
where
    E: TFIDFEngine,
{
    /// Build an engine with an explicit configuration.
    ///
    /// Fails on an empty corpus or on two documents sharing a name.
    pub fn with_config(corpus: &[Document], config: EngineConfig) -> Result<Self> {
        let CorpusIndex { docs, words, matrix } = build_index(corpus, &config)?;
        info!(num_docs = docs.len(), num_words = words.len(), "retrieval engine ready");
        Ok(Self {
            docs,
            words,
            matrix,
            config,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Document names in column id order
    pub fn doc_names(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|(_, name)| name)
    }

    /// word token <-> row id
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.words
    }

    /// document name <-> column id
    pub fn documents(&self) -> &Vocabulary {
        &self.docs
    }

    pub fn matrix(&self) -> &TermDocMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn contains_doc(&self, name: &str) -> bool {
        self.docs.contains(name)
    }

    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of training documents containing `word`.
    /// A word the corpus never saw counts as appearing in
    /// `oov_document_frequency` documents (1 by default).
    pub fn document_frequency(&self, word: &str) -> u32 {
        match self.words.to_id(word) {
            Some(row) => self.matrix.doc_freq(row),
            None => self.config.effective_oov_df(),
        }
    }

    /// Total tokens of a training document
    pub fn doc_token_count(&self, name: &str) -> Result<u64> {
        Ok(self.matrix.doc_length(self.doc_id(name)?))
    }

    pub(crate) fn doc_id(&self, name: &str) -> Result<usize> {
        self.docs
            .to_id(name)
            .ok_or_else(|| RetrievalError::UnknownDocument(name.to_string()))
    }

    pub(crate) fn profile(&self, target: DocRef<'_>) -> Result<TermProfile> {
        match target {
            DocRef::Name(name) => {
                let col = self.doc_id(name)?;
                Ok(TermProfile::Trained {
                    col,
                    total: self.matrix.doc_length(col),
                })
            }
            DocRef::Doc(doc) => Ok(TermProfile::AdHoc {
                freq: TokenFrequency::from_tokens(doc.words()),
            }),
        }
    }

    /// Raw count of `word` in the profiled document
    pub(crate) fn profile_count(&self, profile: &TermProfile, word: &str) -> u64 {
        match profile {
            TermProfile::Trained { col, .. } => self
                .words
                .to_id(word)
                .map_or(0, |row| self.matrix.get(row, *col) as u64),
            TermProfile::AdHoc { freq } => freq.token_count(word) as u64,
        }
    }
}
