// Single source of truth for all default values.

// --- Graph construction ---
pub const DEFAULT_RST_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CAUSAL_THRESHOLD: f64 = 0.27;
pub const DEFAULT_CLUSTER_ENABLED: bool = true;

// --- Relatedness composite (I, C, S, M) ---
pub const DEFAULT_RST_WEIGHT_IDENTITY: f64 = 0.05;
pub const DEFAULT_RST_WEIGHT_CONTEXT: f64 = 0.30;
pub const DEFAULT_RST_WEIGHT_SEMANTIC: f64 = 0.25;
pub const DEFAULT_RST_WEIGHT_METADATA: f64 = 0.10;

// --- Causal composite ---
pub const DEFAULT_CAUSAL_WEIGHT_SEMANTIC: f64 = 0.35;
pub const DEFAULT_CAUSAL_WEIGHT_CONTEXT: f64 = 0.30;
pub const DEFAULT_CAUSAL_WEIGHT_METADATA: f64 = 0.2;
pub const DEFAULT_CAUSAL_WEIGHT_IDENTITY: f64 = 0.1;
pub const DEFAULT_CAUSAL_WEIGHT_RST: f64 = 0.05;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed_tf";
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

// --- Clustering ---
pub const DEFAULT_MODULARITY_RESOLUTION: f64 = 1.0;
pub const DEFAULT_CLUSTER_WEIGHTED: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
