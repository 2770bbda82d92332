use crate::errors::CarenResult;

/// Text embedding provider.
///
/// One instance is built per run and shared by reference across every
/// pairwise comparison.
pub trait ITextEmbedder: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of the output vectors.
    fn dimensions(&self) -> usize;

    /// The provider's name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: ITextEmbedder + ?Sized> ITextEmbedder for Box<T> {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        (**self).embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<T: ITextEmbedder + ?Sized> ITextEmbedder for &T {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        (**self).embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
