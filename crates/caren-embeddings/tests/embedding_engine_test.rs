use caren_core::config::EmbeddingConfig;
use caren_core::traits::ITextEmbedder;
use caren_embeddings::{DegradationChain, EmbeddingEngine, HashedTfProvider, MemoizedEmbedder};
use test_fixtures::{FailingEmbedder, StubEmbedder};

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[test]
fn default_engine_uses_hashed_tf() {
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
    assert_eq!(engine.active_provider(), "hashed_tf");
    assert_eq!(engine.dimensions(), 384);
    let v = engine.embed("unlocked the door").unwrap();
    assert_eq!(v.len(), 384);
}

#[test]
fn engine_memoizes_repeated_texts() {
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
    for _ in 0..3 {
        engine.embed("paid at the counter").unwrap();
    }
    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
}

#[test]
fn unreachable_ollama_degrades_to_hashed_tf() {
    let config = EmbeddingConfig {
        provider: "ollama".into(),
        base_url: Some("http://127.0.0.1:9".into()),
        ..Default::default()
    };
    let engine = EmbeddingEngine::new(&config);
    let v = engine.embed("ordered coffee").unwrap();
    assert_eq!(v, HashedTfProvider::new(384).embed("ordered coffee").unwrap());

    let degradations = engine.degradations();
    assert_eq!(degradations.len(), 1);
    assert_eq!(degradations[0].event.component, "ollama");
    assert_eq!(degradations[0].event.fallback_used.as_deref(), Some("hashed_tf"));
    // The failed provider is now skipped.
    assert_eq!(engine.active_provider(), "hashed_tf");
}

#[test]
fn chain_of_stub_and_failing() {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(FailingEmbedder::default()));
    chain.push(Box::new(StubEmbedder::new(2).with("open door", vec![0.8, 0.6])));
    let memo = MemoizedEmbedder::new(chain, 16);
    assert_eq!(memo.embed("open door").unwrap(), vec![0.8, 0.6]);
}

#[test]
fn hashed_tf_related_actions_are_closer() {
    let p = HashedTfProvider::new(384);
    let a = p.embed("unlock front door").unwrap();
    let b = p.embed("open front door").unwrap();
    let c = p.embed("buy train ticket").unwrap();
    assert!(cosine(&a, &b) > cosine(&a, &c));
}
