use std::cmp::Ordering;

/// Order `(weight, word)` pairs the way keyword ranking needs them:
/// weight descending, then word descending on equal weight.
///
/// NaN weights sort last.
#[inline]
pub fn cmp_weight_then_key_desc(a: &(f64, &str), b: &(f64, &str)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1))
}

/// Sort descending by weight, ties broken by descending key, and keep the first `n`
pub fn top_n_by_weight<'a>(mut pairs: Vec<(f64, &'a str)>, n: usize) -> Vec<(f64, &'a str)> {
    pairs.retain(|(w, _)| !w.is_nan());
    pairs.sort_unstable_by(cmp_weight_then_key_desc);
    pairs.truncate(n);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavier_first() {
        let out = top_n_by_weight(vec![(0.1, "a"), (0.5, "b"), (0.3, "c")], 3);
        assert_eq!(out.iter().map(|p| p.1).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_break_by_descending_key() {
        let out = top_n_by_weight(vec![(0.2, "apple"), (0.2, "pear"), (0.2, "fig")], 2);
        assert_eq!(out.iter().map(|p| p.1).collect::<Vec<_>>(), vec!["pear", "fig"]);
    }

    #[test]
    fn nan_is_dropped_and_n_truncates() {
        let out = top_n_by_weight(vec![(f64::NAN, "x"), (1.0, "y")], 5);
        assert_eq!(out, vec![(1.0, "y")]);
        assert!(top_n_by_weight(vec![(1.0, "y")], 0).is_empty());
    }
}
