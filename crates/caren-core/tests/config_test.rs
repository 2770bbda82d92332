use caren_core::config::*;
use caren_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CarenConfig::from_toml("").unwrap();

    // Graph defaults
    assert_eq!(config.graph.rst_threshold, 0.3);
    assert_eq!(config.graph.causal_threshold, 0.27);
    assert!(config.graph.cluster);
    assert!(!config.graph.cluster_weighted);

    // Relatedness weights
    assert_eq!(config.rst_weights.identity, 0.05);
    assert_eq!(config.rst_weights.context, 0.30);
    assert_eq!(config.rst_weights.semantic, 0.25);
    assert_eq!(config.rst_weights.metadata, 0.10);

    // Causal weights
    assert_eq!(config.causal_weights.semantic, 0.35);
    assert_eq!(config.causal_weights.rst, 0.05);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "hashed_tf");
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.embedding.cache_size, 10_000);
    assert!(config.embedding.base_url.is_none());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[graph]
rst_threshold = 0.1
cluster = false

[rst_weights]
I = 0.5
S = 0.0

[embedding]
provider = "ollama"
base_url = "http://127.0.0.1:11434"
"#;
    let config = CarenConfig::from_toml(toml).unwrap();
    assert_eq!(config.graph.rst_threshold, 0.1);
    assert!(!config.graph.cluster);
    // Untouched keys keep their defaults.
    assert_eq!(config.graph.causal_threshold, 0.27);
    assert_eq!(config.rst_weights.identity, 0.5);
    assert_eq!(config.rst_weights.semantic, 0.0);
    assert_eq!(config.rst_weights.context, 0.30);
    assert_eq!(config.embedding.provider, "ollama");
    assert_eq!(
        config.embedding.base_url.as_deref(),
        Some("http://127.0.0.1:11434")
    );
}

#[test]
fn config_rejects_negative_weight() {
    let err = CarenConfig::from_toml("[causal_weights]\nrst = -0.1\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, value } => {
            assert_eq!(field, "causal_weights.rst");
            assert_eq!(value, -0.1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_non_finite_threshold() {
    let err = CarenConfig::from_toml("[graph]\nrst_threshold = nan\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn config_malformed_toml_is_parse_error() {
    let err = CarenConfig::from_toml("[graph\nrst_threshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { .. }));
}

#[test]
fn config_missing_file_is_read_error() {
    let err = CarenConfig::from_file("/nonexistent/caren.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/caren.toml"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = CarenConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(CarenConfig::from_toml(&text).unwrap(), config);
}
