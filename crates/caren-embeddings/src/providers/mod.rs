//! Provider construction from config.

mod hashed_tf;
mod ollama_provider;

pub use hashed_tf::{HashedTfProvider, HASHED_TF_NAME};
pub use ollama_provider::OllamaProvider;

use caren_core::config::EmbeddingConfig;
use caren_core::traits::ITextEmbedder;
use tracing::warn;

/// Build the primary provider named in `config`.
///
/// `"tfidf"` is accepted as an older name for the hashed term-frequency
/// provider. Unknown provider names and providers that fail to construct
/// fall back to hashed TF, which needs no external resources.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn ITextEmbedder> {
    match config.provider.as_str() {
        "ollama" => match OllamaProvider::new(
            config.base_url.as_deref(),
            &config.model,
            config.dimensions,
        ) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!(error = %e, "ollama provider unavailable, using hashed_tf");
                Box::new(HashedTfProvider::new(config.dimensions))
            }
        },
        HASHED_TF_NAME | "tfidf" => Box::new(HashedTfProvider::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed_tf");
            Box::new(HashedTfProvider::new(config.dimensions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_hashed_tf() {
        let p = create_provider(&EmbeddingConfig::default());
        assert_eq!(p.name(), HASHED_TF_NAME);
        assert_eq!(p.dimensions(), 384);
    }

    #[test]
    fn legacy_tfidf_name_is_accepted() {
        let config = EmbeddingConfig {
            provider: "tfidf".into(),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).name(), HASHED_TF_NAME);
    }

    #[test]
    fn unknown_provider_falls_back_to_hashed_tf() {
        let config = EmbeddingConfig {
            provider: "word2vec".into(),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).name(), HASHED_TF_NAME);
    }
}
