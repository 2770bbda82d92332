//! Offline hashed term-frequency provider.
//!
//! Action, context and metadata strings are short, so there is no corpus to
//! learn document frequencies from. Each term is hashed into a fixed bucket
//! and weighted by sublinear frequency (`1 + ln(count)`), which keeps a
//! repeated word in a metadata blob from swamping the rest of the text.
//! No IDF term is applied. Output is L2-normalized, so cosine similarity
//! reduces to a dot product.

use std::collections::BTreeMap;

use caren_core::errors::CarenResult;
use caren_core::traits::ITextEmbedder;

/// Name used in `[embedding] provider`.
pub const HASHED_TF_NAME: &str = "hashed_tf";

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(&self, term: &str) -> usize {
        let hash = term
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        (hash % self.dimensions as u64) as usize
    }

    fn term_counts(text: &str) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for term in text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.chars().nth(1).is_some())
        {
            *counts.entry(term.to_lowercase()).or_insert(0) += 1;
        }
        counts
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        for (term, count) in Self::term_counts(text) {
            vector[self.bucket(&term)] += 1.0 + (count as f32).ln();
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl ITextEmbedder for HashedTfProvider {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        HASHED_TF_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn blank_text_is_zero_vector() {
        let v = HashedTfProvider::new(128).embed(" - ").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn unit_norm() {
        let v = HashedTfProvider::new(256).embed("unlocked the front door").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        let p = HashedTfProvider::new(256);
        assert_eq!(p.embed("Paid, by CARD!").unwrap(), p.embed("paid by card").unwrap());
    }

    #[test]
    fn repetition_is_sublinear() {
        // "door" x4 vs "open" x1: weights 1 + ln 4 and 1, not 4 and 1.
        let p = HashedTfProvider::new(4096);
        let v = p.embed("door door door door open").unwrap();
        let door = v[p.bucket("door")];
        let open = v[p.bucket("open")];
        assert!((door / open - (1.0 + 4f32.ln())).abs() < 1e-4);
    }

    #[test]
    fn shared_terms_score_higher() {
        let p = HashedTfProvider::new(384);
        let a = p.embed("opened the door").unwrap();
        let b = p.embed("closed the door").unwrap();
        let c = p.embed("ordered a latte").unwrap();
        assert!(dot(&a, &b) > dot(&a, &c));
    }

    #[test]
    fn non_ascii_terms_are_kept() {
        let v = HashedTfProvider::new(64).embed("문을 열었다").unwrap();
        assert!(v.iter().any(|&x| x > 0.0));
    }

    #[test]
    fn zero_dimensions_clamped() {
        assert_eq!(HashedTfProvider::new(0).dimensions(), 1);
    }
}
