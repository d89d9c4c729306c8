// file: src/vectorize/similarity.rs
// description: cosine similarity between dense weight vectors
// reference: https://en.wikipedia.org/wiki/Cosine_similarity

use crate::error::{NlpError, Result};

/// Cosine of the angle between `a` and `b`.
///
/// Zero-norm vectors have no direction, so their similarity to anything is 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(NlpError::Vectorize(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}
