//! Cosine similarity between two embedding vectors.

/// Errors that can occur while comparing two vectors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SimilarityError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Cannot compare a zero-norm vector")]
    ZeroNorm,
}

/// Compute cosine similarity between two vectors of equal dimension.
///
/// Accumulates in `f64` and returns the unrounded value. Fails instead of
/// dividing by zero when either vector has zero (or non-finite) norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if !is_usable_norm(norm_a) || !is_usable_norm(norm_b) {
        return Err(SimilarityError::ZeroNorm);
    }

    let dot_product: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();

    Ok(dot_product / (norm_a * norm_b))
}

/// Compute L2 norm of a vector.
fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt()
}

fn is_usable_norm(norm: f64) -> bool {
    norm.is_finite() && norm != 0.0
}
