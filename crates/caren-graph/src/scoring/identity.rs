//! Identity overlap: Jaccard similarity of whitespace-separated tokens.

use std::collections::HashSet;

/// 0.0 when either side has no tokens.
pub fn identity_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let set_a: HashSet<&str> = a.unwrap_or_default().split_whitespace().collect();
    let set_b: HashSet<&str> = b.unwrap_or_default().split_whitespace().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}
