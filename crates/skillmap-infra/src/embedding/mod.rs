//! FastEmbed-based local embedding generation.
//!
//! Implements the `Embedder` trait from `skillmap-core` using fastembed's
//! BGESmallENV15 model (384 dimensions) with ONNX runtime inference.
//! Inference is synchronous, so calls are moved off the async runtime
//! with `spawn_blocking`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use skillmap_core::embedder::Embedder;
use skillmap_types::error::EmbeddingError;

/// Output dimensionality of BGESmallENV15 embeddings.
pub const EMBEDDING_DIMENSION: usize = 384;

/// Canonical name of the embedding model.
pub const EMBEDDING_MODEL_NAME: &str = "bge-small-en-v1.5";

/// Local embedding generator backed by fastembed.
///
/// Cheap to clone; the underlying ONNX session is shared.
#[derive(Clone)]
pub struct FastEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
}

impl FastEmbedder {
    /// Load the BGESmallENV15 model, downloading it on first use.
    pub fn new() -> Result<Self, EmbeddingError> {
        Self::from_options(InitOptions::new(EmbeddingModel::BGESmallENV15))
    }

    /// Load the model with its files cached under `cache_dir`.
    pub fn with_cache_dir(cache_dir: &Path) -> Result<Self, EmbeddingError> {
        Self::from_options(
            InitOptions::new(EmbeddingModel::BGESmallENV15)
                .with_cache_dir(cache_dir.to_path_buf()),
        )
    }

    fn from_options(options: InitOptions) -> Result<Self, EmbeddingError> {
        let model = TextEmbedding::try_new(options.with_show_download_progress(false))
            .map_err(|e| EmbeddingError::Model(e.to_string()))?;
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

impl Embedder for FastEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let model = Arc::clone(&self.model);
        let batch = texts.to_vec();
        tokio::task::spawn_blocking(move || {
            model
                .lock()
                .expect("embedding model mutex poisoned")
                .embed(batch, None)
        })
        .await
        .map_err(|e| EmbeddingError::Model(format!("embedding task failed: {e}")))?
        .map_err(|e| EmbeddingError::Model(e.to_string()))
    }

    fn model_name(&self) -> &str {
        EMBEDDING_MODEL_NAME
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }
}
