use std::fmt::{self, Debug, Display};

use tracing::debug;

use crate::vectorizer::{tfidf::TFIDFEngine, TFIDF};

/// One ranked document
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry {
    /// document name
    pub key: String,
    pub score: f64,
    /// token count of the document
    pub doc_len: u64,
}

/// Structure to store search results
#[derive(Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// The sort is stable, so equal scores keep document id order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|e| !e.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the first `n` entries
    pub fn top(mut self, n: usize) -> Self {
        self.list.truncate(n);
        self
    }

    /// Document names in current order
    pub fn keys(&self) -> Vec<String> {
        self.list.iter().map(|e| e.key.clone()).collect()
    }

    pub fn score_of(&self, key: &str) -> Option<f64> {
        self.list.iter().find(|e| e.key == key).map(|e| e.score)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // each hit on its own line
            writeln!(f, "Hits [")?;
            for e in &self.list {
                writeln!(f, "    {:?}: {:.6} (len: {})", e.key, e.score, e.doc_len)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, e) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} {:.6}", rank + 1, e.key, e.score)?;
        }
        Ok(())
    }
}

impl<E> TFIDF<E>
where
    E: TFIDFEngine,
{
    /// Names of the `n` documents that best match `keywords`.
    ///
    /// Out-of-vocabulary keywords are dropped; if none remain nothing is
    /// returned.
    pub fn search_docs<S>(&self, keywords: &[S], n: usize) -> Vec<String>
    where
        S: AsRef<str>,
    {
        self.search_docs_scored(keywords).top(n).keys()
    }

    /// Every document scored against `keywords`, best first.
    ///
    /// score(d) = Σ_kw tf(kw, d) * idf(kw)
    pub fn search_docs_scored<S>(&self, keywords: &[S]) -> Hits
    where
        S: AsRef<str>,
    {
        let rows: Vec<usize> = keywords
            .iter()
            .filter_map(|kw| self.words.to_id(kw.as_ref()))
            .collect();
        let dropped = keywords.len() - rows.len();
        if rows.is_empty() {
            debug!(dropped, "no query keyword is in the vocabulary");
            return Hits::default();
        }

        let num_docs = self.num_docs();
        let lengths = self.matrix.doc_lengths();
        let mut scores = vec![0.0f64; num_docs];
        for &row in &rows {
            let idf = E::idf(num_docs, self.matrix.doc_freq(row));
            for (d, &count) in self.matrix.row(row).iter().enumerate() {
                scores[d] += E::tf(count as u64, lengths[d]) * idf;
            }
        }

        let mut hits = Hits::new(
            self.docs
                .iter()
                .map(|(d, name)| HitEntry {
                    key: name.to_string(),
                    score: scores[d],
                    doc_len: lengths[d],
                })
                .collect(),
        );
        hits.sort_by_score_desc();
        debug!(kept = rows.len(), dropped, "scored documents against keywords");
        hits
    }
}
