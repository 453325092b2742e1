//! Cosine similarity over term-count and centroid vectors.

/// Cosine similarity between `a` and `b`, in `[0, 1]`.
///
/// Works on raw counts (`u32`) and centroids (`f32`) alike. If either vector
/// has zero magnitude the similarity is 0. Inputs are expected to be
/// non-negative; the result is clamped so rounding cannot leave the range.
///
/// ```rust
/// use doclump::cluster::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1u32, 1, 0], &[1u32, 1, 0]), 1.0);
/// assert_eq!(cosine_similarity(&[1u32, 0], &[0u32, 3]), 0.0);
/// assert_eq!(cosine_similarity(&[0u32, 0], &[2u32, 3]), 0.0);
/// ```
pub fn cosine_similarity<A, B>(a: &[A], b: &[B]) -> f32
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    debug_assert_eq!(a.len(), b.len());

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (x.into(), y.into());
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    ((dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)) as f32
}
