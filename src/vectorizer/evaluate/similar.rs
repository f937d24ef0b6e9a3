use indexmap::IndexSet;
use tracing::debug;

use crate::{
    document::DocRef,
    error::Result,
    utils::math::cosine_similarity,
    vectorizer::{evaluate::scoring::{HitEntry, Hits}, tfidf::TFIDFEngine, TermProfile, TFIDF},
};

/// The top `m` keywords of every training document, computed once.
///
/// Keywords here are the similarity dimensions, so zero-weight words present
/// in a document are kept.
///
/// Similar-document search otherwise re-extracts keywords for each candidate
/// on every query.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    m: usize,
    /// indexed by document id
    keywords: Vec<Vec<String>>,
}

impl KeywordIndex {
    /// keywords per document
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    pub fn keywords_of(&self, doc_id: usize) -> Option<&[String]> {
        self.keywords.get(doc_id).map(Vec::as_slice)
    }
}

impl<E> TFIDF<E>
where
    E: TFIDFEngine,
{
    /// Names of the `n` training documents most similar to `target`, comparing
    /// `m`-keyword term-frequency vectors by cosine similarity.
    ///
    /// Keywords are taken over every word present in a document, zero weights
    /// included, so a training document always scores 1.0 against itself.
    pub fn similar_docs(&self, n: usize, m: usize, target: DocRef<'_>) -> Result<Vec<String>> {
        Ok(self.similar_docs_scored(m, target)?.top(n).keys())
    }

    /// Every training document with its similarity to `target`, best first
    pub fn similar_docs_scored(&self, m: usize, target: DocRef<'_>) -> Result<Hits> {
        let input = self.profile(target)?;
        let input_kws = self.rank_present_terms(&input, m);
        let hits = self.rank_by_similarity(&input, &input_kws, |col| {
            let profile = TermProfile::Trained { col, total: self.matrix.doc_length(col) };
            self.rank_present_terms(&profile, m).into_iter().map(|(w, _)| w).collect()
        });
        debug!(doc = target.label(), m, "ranked similar documents");
        Ok(hits)
    }

    /// Precompute every training document's top `m` keywords
    pub fn keyword_index(&self, m: usize) -> KeywordIndex {
        let keywords = (0..self.num_docs())
            .map(|col| {
                let profile = TermProfile::Trained { col, total: self.matrix.doc_length(col) };
                self.rank_present_terms(&profile, m).into_iter().map(|(w, _)| w).collect()
            })
            .collect();
        KeywordIndex { m, keywords }
    }

    /// [`TFIDF::similar_docs`] reading candidate keywords from `index`
    pub fn similar_docs_with(&self, index: &KeywordIndex, n: usize, target: DocRef<'_>) -> Result<Vec<String>> {
        let input = self.profile(target)?;
        let input_kws = self.rank_present_terms(&input, index.m);
        let hits = self.rank_by_similarity(&input, &input_kws, |col| {
            index.keywords_of(col).map(<[String]>::to_vec).unwrap_or_default()
        });
        Ok(hits.top(n).keys())
    }

    fn rank_by_similarity<F>(&self, input: &TermProfile, input_kws: &[(String, f64)], mut doc_kws: F) -> Hits
    where
        F: FnMut(usize) -> Vec<String>,
    {
        let input_total = input.total();
        let mut list = Vec::with_capacity(self.num_docs());
        for (col, name) in self.docs.iter() {
            let candidate = doc_kws(col);
            // union of both keyword sets, restricted to the vocabulary
            let rows: IndexSet<usize> = input_kws
                .iter()
                .map(|(w, _)| w.as_str())
                .chain(candidate.iter().map(String::as_str))
                .filter_map(|w| self.words.to_id(w))
                .collect();

            let doc_total = self.matrix.doc_length(col);
            let mut vec_input = Vec::with_capacity(rows.len());
            let mut vec_doc = Vec::with_capacity(rows.len());
            for &row in &rows {
                let word = self.words.from_id(row).unwrap_or_default();
                vec_input.push(E::tf(self.profile_count(input, word), input_total));
                vec_doc.push(E::tf(self.matrix.get(row, col) as u64, doc_total));
            }

            list.push(HitEntry {
                key: name.to_string(),
                score: cosine_similarity(&vec_input, &vec_doc),
                doc_len: doc_total,
            });
        }
        let mut hits = Hits::new(list);
        hits.sort_by_score_desc();
        hits
    }
}
