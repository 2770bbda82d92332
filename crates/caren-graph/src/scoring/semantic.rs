//! Embedding cosine similarity. Never fails: any problem scores 0.0.

use caren_core::traits::ITextEmbedder;
use tracing::debug;

/// Cosine similarity of the two texts' embeddings.
///
/// Returns 0.0 if either text is absent or empty, if either embedding call
/// fails, or if the vectors differ in length or have zero magnitude.
pub fn semantic_score(a: Option<&str>, b: Option<&str>, embedder: &dyn ITextEmbedder) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    match (embedder.embed(a), embedder.embed(b)) {
        (Ok(va), Ok(vb)) => cosine_similarity(&va, &vb),
        (Err(e), _) | (_, Err(e)) => {
            debug!(provider = embedder.name(), error = %e, "embedding failed, similarity 0.0");
            0.0
        }
    }
}

/// Cosine similarity between two vectors, computed in f64.
/// Returns 0.0 for mismatched, empty, zero-magnitude or non-finite vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }
    let cos = dot / denom;
    if cos.is_finite() {
        cos.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
