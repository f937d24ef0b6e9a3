use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{
    config::EngineConfig,
    document::Document,
    error::{Result, RetrievalError},
    vectorizer::{matrix::TermDocMatrix, vocab::Vocabulary},
};

/// Everything the engine needs from a corpus, built in one batch.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    /// document name <-> column id
    pub docs: Vocabulary,
    /// word token <-> row id
    pub words: Vocabulary,
    pub matrix: TermDocMatrix,
}

/// Build both vocabularies and the count matrix from `corpus`.
///
/// Only `words` feed the vocabulary; sentences are ignored here.
#[instrument(skip_all, fields(docs = corpus.len()))]
pub fn build_index(corpus: &[Document], config: &EngineConfig) -> Result<CorpusIndex> {
    if corpus.is_empty() {
        return Err(RetrievalError::EmptyCorpus);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(corpus.len());
    for doc in corpus {
        if !seen.insert(doc.name()) {
            return Err(RetrievalError::DuplicateDocument(doc.name().to_string()));
        }
    }

    let docs = Vocabulary::from_iter_ordered(corpus.iter().map(|d| d.name()), config.id_order);
    let words = Vocabulary::from_iter_ordered(
        corpus.iter().flat_map(|d| d.words().iter().map(String::as_str)),
        config.id_order,
    );

    let mut matrix = TermDocMatrix::zeros(words.len(), docs.len());
    for doc in corpus {
        // both lookups are total: every name and word was just inserted
        let Some(col) = docs.to_id(doc.name()) else { continue };
        for word in doc.words() {
            if let Some(row) = words.to_id(word) {
                matrix.increment(row, col);
            }
        }
    }
    matrix.seal();

    debug!(num_docs = docs.len(), num_words = words.len(), "built term-document matrix");
    Ok(CorpusIndex { docs, words, matrix })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdOrder;

    fn doc(name: &str, words: &[&str]) -> Document {
        Document::new(name, words.to_vec(), vec![])
    }

    #[test]
    fn column_sums_match_document_lengths() {
        let corpus = vec![
            doc("b", &["x", "y", "x"]),
            doc("a", &["y"]),
            doc("c", &["z", "z", "z", "x"]),
        ];
        let index = build_index(&corpus, &EngineConfig::default()).unwrap();
        for d in &corpus {
            let col = index.docs.to_id(d.name()).unwrap();
            assert_eq!(index.matrix.doc_length(col), d.token_count() as u64);
            assert_eq!(index.matrix.column(col).map(u64::from).sum::<u64>(), d.token_count() as u64);
        }
    }

    #[test]
    fn counts_land_in_the_right_cells() {
        let corpus = vec![doc("a", &["cat", "cat", "dog"]), doc("b", &["dog"])];
        let index = build_index(&corpus, &EngineConfig::default()).unwrap();
        let cat = index.words.to_id("cat").unwrap();
        let dog = index.words.to_id("dog").unwrap();
        let a = index.docs.to_id("a").unwrap();
        let b = index.docs.to_id("b").unwrap();
        assert_eq!(index.matrix.get(cat, a), 2);
        assert_eq!(index.matrix.get(cat, b), 0);
        assert_eq!(index.matrix.get(dog, b), 1);
        assert_eq!(index.matrix.doc_freq(dog), 2);
    }

    #[test]
    fn first_seen_order_follows_corpus() {
        let corpus = vec![doc("z", &["b", "a"]), doc("y", &["a"])];
        let config = EngineConfig::default().with_id_order(IdOrder::FirstSeen);
        let index = build_index(&corpus, &config).unwrap();
        assert_eq!(index.docs.from_id(0), Some("z"));
        assert_eq!(index.words.from_id(0), Some("b"));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let err = build_index(&[], &EngineConfig::default()).unwrap_err();
        assert_eq!(err, RetrievalError::EmptyCorpus);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let corpus = vec![doc("a", &["x"]), doc("a", &["y"])];
        let err = build_index(&corpus, &EngineConfig::default()).unwrap_err();
        assert_eq!(err, RetrievalError::DuplicateDocument("a".to_string()));
    }
}
