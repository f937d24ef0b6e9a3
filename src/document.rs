use serde::{Deserialize, Serialize};

use crate::error::{Result, RetrievalError};

/// A document as produced by the corpus loader.
///
/// `words` drives the term-document matrix; `sentences` is only read by
/// summarization. The engine never mutates a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    words: Vec<String>,
    #[serde(default)]
    sentences: Vec<Vec<String>>,
}

impl Document {
    pub fn new<S, W>(name: S, words: Vec<W>, sentences: Vec<Vec<W>>) -> Self
    where
        S: Into<String>,
        W: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
            sentences: sentences
                .into_iter()
                .map(|s| s.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Build a document whose words are its sentences flattened in order
    pub fn from_sentences<S, W>(name: S, sentences: Vec<Vec<W>>) -> Self
    where
        S: Into<String>,
        W: Into<String>,
    {
        let sentences: Vec<Vec<String>> = sentences
            .into_iter()
            .map(|s| s.into_iter().map(Into::into).collect())
            .collect();
        let words = sentences.iter().flatten().cloned().collect();
        Self {
            name: name.into(),
            words,
            sentences,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.words.len()
    }
}

/// The document a query is about: either a trained document by name, or an
/// ad-hoc document that is not part of the matrix.
#[derive(Debug, Clone, Copy)]
pub enum DocRef<'a> {
    Name(&'a str),
    Doc(&'a Document),
}

impl<'a> DocRef<'a> {
    /// Accept the loose "name or doc" calling shape.
    /// Exactly one of the two must be given.
    pub fn from_options(name: Option<&'a str>, doc: Option<&'a Document>) -> Result<Self> {
        match (name, doc) {
            (Some(name), None) => Ok(DocRef::Name(name)),
            (None, Some(doc)) => Ok(DocRef::Doc(doc)),
            (Some(_), Some(_)) => Err(RetrievalError::InvalidArgument(
                "expected exactly one of name or doc, got both".to_string(),
            )),
            (None, None) => Err(RetrievalError::InvalidArgument(
                "expected exactly one of name or doc, got neither".to_string(),
            )),
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            DocRef::Name(name) => name,
            DocRef::Doc(doc) => doc.name(),
        }
    }
}

impl<'a> From<&'a Document> for DocRef<'a> {
    fn from(doc: &'a Document) -> Self {
        DocRef::Doc(doc)
    }
}

impl<'a> From<&'a str> for DocRef<'a> {
    fn from(name: &'a str) -> Self {
        DocRef::Name(name)
    }
}
