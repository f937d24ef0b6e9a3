use num::Num;

/// Dot product of two dense vectors
/// d(a, b) = Σ(a_i * b_i)
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    debug_assert_eq!(a.len(), b.len(), "Vectors must be of the same length to compute dot product.");
    a.iter().zip(b).map(|(&x, &y)| x.into() * y.into()).sum()
}

#[inline]
pub fn norm_sq<N>(a: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    a.iter().map(|&x| { let x: f64 = x.into(); x * x }).sum()
}

/// Cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// An all-zero vector has no direction, so its similarity to anything is 0.
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    let norm_a = norm_sq(a);
    let norm_b = norm_sq(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_vectors_are_fully_similar() {
        let a = [1.0f64, 2.0, 0.0];
        let b = [2.0f64, 4.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_vectors_are_dissimilar() {
        let a = [1u32, 0];
        let b = [0u32, 3];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_vector_has_zero_similarity() {
        let a = [0.0f64, 0.0];
        let b = [1.0f64, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity::<f64>(&[], &[]), 0.0);
    }

    #[test]
    fn dot_and_norm() {
        assert_eq!(dot(&[1u32, 2, 3], &[4u32, 5, 6]), 32.0);
        assert_eq!(norm_sq(&[3.0f32, 4.0]), 25.0);
    }
}
