/// Dense term-document frequency matrix.
///
/// Rows are words, columns are documents; `M[w, d]` is the raw count of word
/// `w` in document `d`. Stored row-major so a word's row (the thing document
/// frequency and search read) is one contiguous slice.
///
/// Column sums and per-row non-zero counts are cached once the matrix is
/// sealed; the matrix is never written to after that.
#[derive(Debug, Clone)]
pub struct TermDocMatrix {
    data: Vec<u32>,
    num_words: usize,
    num_docs: usize,
    /// column sums, i.e. token count per document
    doc_lengths: Vec<u64>,
    /// non-zero entries per row, i.e. document frequency per word
    doc_freqs: Vec<u32>,
}

impl TermDocMatrix {
    /// Zero matrix of shape `(num_words, num_docs)`
    pub(crate) fn zeros(num_words: usize, num_docs: usize) -> Self {
        Self {
            data: vec![0; num_words * num_docs],
            num_words,
            num_docs,
            doc_lengths: vec![0; num_docs],
            doc_freqs: vec![0; num_words],
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, word: usize, doc: usize) {
        debug_assert!(word < self.num_words && doc < self.num_docs);
        self.data[word * self.num_docs + doc] += 1;
    }

    /// Fill the length and document-frequency caches
    pub(crate) fn seal(&mut self) {
        self.doc_lengths.iter_mut().for_each(|l| *l = 0);
        for (w, row) in self.data.chunks_exact(self.num_docs.max(1)).enumerate().take(self.num_words) {
            let mut df = 0u32;
            for (d, &count) in row.iter().enumerate() {
                if count > 0 {
                    df += 1;
                    self.doc_lengths[d] += count as u64;
                }
            }
            self.doc_freqs[w] = df;
        }
    }

    /// (num_words, num_docs)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_words, self.num_docs)
    }

    /// Count of `word` in `doc`, 0 when either id is out of range
    #[inline]
    pub fn get(&self, word: usize, doc: usize) -> u32 {
        if word >= self.num_words || doc >= self.num_docs {
            return 0;
        }
        self.data[word * self.num_docs + doc]
    }

    /// Counts of one word across all documents, empty for an unknown word id
    #[inline]
    pub fn row(&self, word: usize) -> &[u32] {
        if word >= self.num_words {
            return &[];
        }
        let start = word * self.num_docs;
        &self.data[start..start + self.num_docs]
    }

    /// Counts of all words in one document, in word-id order.
    /// Yields nothing for an unknown document id.
    pub fn column(&self, doc: usize) -> impl Iterator<Item = u32> + '_ {
        let rows = if doc < self.num_docs { self.num_words } else { 0 };
        (0..rows).map(move |w| self.data[w * self.num_docs + doc])
    }

    /// Total tokens in `doc` (column sum)
    #[inline]
    pub fn doc_length(&self, doc: usize) -> u64 {
        self.doc_lengths.get(doc).copied().unwrap_or(0)
    }

    #[inline]
    pub fn doc_lengths(&self) -> &[u64] {
        &self.doc_lengths
    }

    /// Number of documents containing `word` (non-zero entries in its row)
    #[inline]
    pub fn doc_freq(&self, word: usize) -> u32 {
        self.doc_freqs.get(word).copied().unwrap_or(0)
    }
}
