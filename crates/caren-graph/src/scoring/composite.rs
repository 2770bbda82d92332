//! The two weighted composites and edge-weight rounding.

use caren_core::config::{CausalWeights, RstWeights};
use caren_core::models::RelationComponents;

/// `I*f_I + C*f_C + S*f_S + M*f_M`.
pub fn rst_score(c: &RelationComponents, w: &RstWeights) -> f64 {
    w.identity * c.identity + w.context * c.context + w.semantic * c.semantic + w.metadata * c.metadata
}

/// `semantic*f_S + context*f_C + metadata*f_M + identity*f_I + rst*rst_score`.
pub fn causal_score(c: &RelationComponents, rst: f64, w: &CausalWeights) -> f64 {
    w.semantic * c.semantic
        + w.context * c.context
        + w.metadata * c.metadata
        + w.identity * c.identity
        + w.rst * rst
}

/// Round to `places` decimals, halves away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rst_score_uses_default_weights() {
        let c = RelationComponents::new(1.0, 1.0, 1.0, 1.0);
        assert!((rst_score(&c, &RstWeights::default()) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn causal_score_uses_default_weights() {
        let c = RelationComponents::new(1.0, 1.0, 1.0, 1.0);
        assert!((causal_score(&c, 1.0, &CausalWeights::default()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn semantic_only_pair() {
        let c = RelationComponents::new(0.0, 0.8, 0.0, 0.0);
        let rst = rst_score(&c, &RstWeights::default());
        assert!((rst - 0.2).abs() < 1e-12);
        let causal = causal_score(&c, rst, &CausalWeights::default());
        assert!((causal - 0.29).abs() < 1e-12);
    }

    #[test]
    fn zero_components_score_zero() {
        let c = RelationComponents::default();
        assert_eq!(rst_score(&c, &RstWeights::default()), 0.0);
        assert_eq!(causal_score(&c, 0.0, &CausalWeights::default()), 0.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.4249, 2), 0.42);
        assert_eq!(round_to(0.3106, 3), 0.311);
        assert_eq!(round_to(0.29, 3), 0.29);
        assert_eq!(round_to(-0.126, 2), -0.13);
    }
}
