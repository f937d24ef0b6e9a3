use tracing::debug;

use crate::{
    document::DocRef,
    error::{Result, RetrievalError},
    vectorizer::{tfidf::TFIDFEngine, TFIDF},
};

/// Pick one sentence per keyword.
///
/// For each keyword in the given order, the first sentence that contains it
/// and has not been picked yet is taken. Sentences come back space-joined in
/// pick order, not document order.
pub fn select_sentences<K>(keywords: &[K], sentences: &[Vec<String>]) -> Vec<String>
where
    K: AsRef<str>,
{
    let mut picked: Vec<&[String]> = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let kw = kw.as_ref();
        let found = sentences
            .iter()
            .find(|s| s.iter().any(|t| t == kw) && !picked.contains(&s.as_slice()));
        if let Some(sentence) = found {
            picked.push(sentence);
        }
        if picked.len() == sentences.len() {
            break;
        }
    }
    picked.into_iter().map(|s| s.join(" ")).collect()
}

impl<E> TFIDF<E>
where
    E: TFIDFEngine,
{
    /// Extractive summary of `target`: its `n` keywords, each mapped to the
    /// first unused sentence containing it.
    ///
    /// The matrix keeps no sentences, so `target` must be a [`DocRef::Doc`].
    pub fn summarize(&self, n: usize, target: DocRef<'_>) -> Result<Vec<String>> {
        let doc = match target {
            DocRef::Doc(doc) => doc,
            DocRef::Name(name) => return Err(RetrievalError::SentencesUnavailable(name.to_string())),
        };
        let keywords = self.keywords(n, DocRef::Doc(doc))?;
        let summary = select_sentences(&keywords, doc.sentences());
        debug!(doc = doc.name(), keywords = keywords.len(), sentences = summary.len(), "summarized");
        Ok(summary)
    }
}
