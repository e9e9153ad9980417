//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface for embedding text into fixed-dimension vectors
//! for similarity search. Implementations (e.g., fastembed) live in
//! skillmap-infra.

use skillmap_types::error::EmbeddingError;

/// Trait for converting text into embedding vectors.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in skillmap-infra.
///
/// The output dimension is fixed once at model load. Every index built
/// from an embedder shares that dimension; a binding owns exactly one
/// embedder so vectors from differently-configured models can never mix
/// in one index.
pub trait Embedder: Send + Sync {
    /// Embed one or more texts into vectors.
    ///
    /// Returns one vector per input text, in input order. Every vector
    /// has exactly [`dimension`](Self::dimension) components.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send;

    /// The model name used for embeddings (e.g., "bge-small-en-v1.5").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}

/// Embed a single text as a one-item batch.
pub(crate) async fn embed_one<E: Embedder>(
    embedder: &E,
    text: &str,
) -> Result<Vec<f32>, EmbeddingError> {
    let batch = [text.to_string()];
    let mut vectors = embedder.embed(&batch).await?;
    if vectors.len() != 1 {
        return Err(EmbeddingError::BatchShape {
            expected: 1,
            actual: vectors.len(),
        });
    }
    Ok(vectors.swap_remove(0))
}
