/// TF-IDF weighting strategy.
///
/// Plugged into [`crate::TFIDF`] as a type parameter. Implementations must
/// return 0.0 instead of faulting when a denominator is zero.
pub trait TFIDFEngine {
    /// term frequency of a word seen `count` times in a document of `total` tokens
    fn tf(count: u64, total: u64) -> f64;
    /// inverse document frequency of a word found in `doc_freq` of `num_docs` documents
    fn idf(num_docs: usize, doc_freq: u32) -> f64;

    #[inline]
    fn weight(count: u64, total: u64, num_docs: usize, doc_freq: u32) -> f64 {
        Self::tf(count, total) * Self::idf(num_docs, doc_freq)
    }
}

/// Textbook weighting: `count / total` times `ln(N / df)`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }

    #[inline]
    fn idf(num_docs: usize, doc_freq: u32) -> f64 {
        if doc_freq == 0 || num_docs == 0 {
            return 0.0;
        }
        (num_docs as f64 / doc_freq as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_is_tf_times_idf() {
        let w = DefaultTFIDFEngine::weight(2, 3, 3, 2);
        assert!((w - (2.0 / 3.0) * 1.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn zero_denominators_yield_zero() {
        assert_eq!(DefaultTFIDFEngine::tf(1, 0), 0.0);
        assert_eq!(DefaultTFIDFEngine::idf(4, 0), 0.0);
        assert_eq!(DefaultTFIDFEngine::idf(0, 1), 0.0);
    }

    #[test]
    fn ubiquitous_word_has_zero_idf() {
        assert_eq!(DefaultTFIDFEngine::idf(5, 5), 0.0);
    }
}
