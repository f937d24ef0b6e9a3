use tracing::debug;

use crate::{
    document::DocRef,
    error::Result,
    utils::sort::top_n_by_weight,
    vectorizer::{tfidf::TFIDFEngine, TermProfile, TFIDF},
};

impl<E> TFIDF<E>
where
    E: TFIDFEngine,
{
    /// The `n` words with the highest tf-idf weight in `target`.
    ///
    /// Words are ordered by descending weight; equal weights fall back to
    /// descending word order. Only positively weighted words are returned,
    /// so the result may be shorter than `n`.
    pub fn keywords(&self, n: usize, target: DocRef<'_>) -> Result<Vec<String>> {
        Ok(self
            .weighted_keywords(n, target)?
            .into_iter()
            .map(|(word, _)| word)
            .collect())
    }

    /// Same as [`TFIDF::keywords`] with the weight of each word
    pub fn weighted_keywords(&self, n: usize, target: DocRef<'_>) -> Result<Vec<(String, f64)>> {
        let profile = self.profile(target)?;
        let ranked = self.rank_terms(&profile, n);
        debug!(doc = target.label(), n, found = ranked.len(), "extracted keywords");
        Ok(ranked)
    }

    /// Top `n` positively weighted words of a profiled document
    pub(crate) fn rank_terms(&self, profile: &TermProfile, n: usize) -> Vec<(String, f64)> {
        let positive = self
            .weigh_terms(profile)
            .into_iter()
            .filter(|(w, _)| *w > 0.0)
            .collect();
        Self::select_top(positive, n)
    }

    /// Top `n` words present in a profiled document, zero weights included.
    ///
    /// Similarity vectors need every present word as a candidate dimension:
    /// a document whose words all occur in every training document still
    /// has a non-zero term-frequency vector.
    pub(crate) fn rank_present_terms(&self, profile: &TermProfile, n: usize) -> Vec<(String, f64)> {
        Self::select_top(self.weigh_terms(profile), n)
    }

    fn select_top(weighted: Vec<(f64, &str)>, n: usize) -> Vec<(String, f64)> {
        top_n_by_weight(weighted, n)
            .into_iter()
            .map(|(w, word)| (word.to_string(), w))
            .collect()
    }

    /// tf-idf weight of every word with a non-zero count in the profile
    fn weigh_terms<'a>(&'a self, profile: &'a TermProfile) -> Vec<(f64, &'a str)> {
        let total = profile.total();
        if total == 0 {
            return Vec::new();
        }
        let num_docs = self.num_docs();

        match profile {
            TermProfile::Trained { col, .. } => self
                .words
                .iter()
                .filter_map(|(row, word)| {
                    let count = self.matrix.get(row, *col);
                    (count > 0).then(|| {
                        let w = E::weight(count as u64, total, num_docs, self.matrix.doc_freq(row));
                        (w, word)
                    })
                })
                .collect(),
            TermProfile::AdHoc { freq } => freq
                .iter()
                .map(|(word, count)| {
                    let w = E::weight(count as u64, total, num_docs, self.document_frequency(word));
                    (w, word)
                })
                .collect(),
        }
    }
}
