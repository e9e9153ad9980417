//! Rolling interaction memory.
//!
//! An append-only embedding index of past interactions with an arbitrary
//! payload per entry. State lives in process memory only and resets on
//! restart; that is a design property, not an oversight.
//!
//! One instance is shared across all in-flight requests, so the corpus
//! sits behind an `RwLock`. The lock is never held across an await:
//! embedding happens first, then the corpus is locked for the append or
//! the scan.

use std::sync::RwLock;

use tracing::debug;

use skillmap_types::error::SearchError;

use crate::embedder::{Embedder, embed_one};
use crate::index::corpus::EmbeddedCorpus;

/// Default number of memory items retrieved for context injection.
pub const DEFAULT_CONTEXT_K: usize = 3;

/// Append-only semantic memory of past interactions.
pub struct InteractionMemory<E: Embedder, T> {
    embedder: E,
    corpus: RwLock<EmbeddedCorpus<T>>,
}

impl<E: Embedder, T: Clone + Send + Sync> InteractionMemory<E, T> {
    /// Create an empty memory owning its embedder.
    pub fn new(embedder: E) -> Self {
        let dimension = embedder.dimension();
        Self {
            embedder,
            corpus: RwLock::new(EmbeddedCorpus::new(dimension)),
        }
    }

    /// Number of stored interactions.
    pub fn len(&self) -> usize {
        self.corpus.read().expect("memory corpus lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embed `text` and append it together with its payload.
    pub async fn add(&self, text: &str, info: T) -> Result<(), SearchError> {
        let vector = embed_one(&self.embedder, text).await?;

        let mut corpus = self.corpus.write().expect("memory corpus lock poisoned");
        corpus.insert(&vector, info)?;
        debug!(stored = corpus.len(), "interaction added to memory");
        Ok(())
    }

    /// The payloads of the `k` stored interactions closest to `text`,
    /// most similar first.
    ///
    /// An empty memory returns an empty list without touching the
    /// embedder. `k` is clamped to the stored count before the search.
    pub async fn retrieve(&self, text: &str, k: usize) -> Result<Vec<T>, SearchError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let query = embed_one(&self.embedder, text).await?;

        // Append-only: the corpus can only have grown since the emptiness
        // check above, so the clamp below stays valid.
        let corpus = self.corpus.read().expect("memory corpus lock poisoned");
        let k = k.min(corpus.len());
        if k == 0 {
            return Ok(Vec::new());
        }
        Ok(corpus.nearest(&query, k).into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubEmbedder;

    #[tokio::test]
    async fn test_retrieve_on_empty_memory_skips_embedder() {
        let memory: InteractionMemory<_, String> = InteractionMemory::new(StubEmbedder::new(2));

        let items = memory.retrieve("anything", 3).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(memory.embedder.calls(), 0);
    }

    #[tokio::test]
    async fn test_added_item_is_its_own_nearest_neighbor() {
        let memory = InteractionMemory::new(StubEmbedder::new(2));
        memory.add("rust basics", "first".to_string()).await.unwrap();
        memory.add("french cooking", "second".to_string()).await.unwrap();

        let items = memory.retrieve("rust basics", 1).await.unwrap();
        assert_eq!(items, vec!["first".to_string()]);
    }

    #[tokio::test]
    async fn test_retrieve_orders_by_ascending_distance() {
        let embedder = StubEmbedder::new(2)
            .with_preset("q", vec![0.0, 0.0])
            .with_preset("a", vec![1.0, 0.0])
            .with_preset("b", vec![2.0, 0.0])
            .with_preset("c", vec![3.0, 0.0]);
        let memory = InteractionMemory::new(embedder);
        memory.add("c", "c-info".to_string()).await.unwrap();
        memory.add("a", "a-info".to_string()).await.unwrap();
        memory.add("b", "b-info".to_string()).await.unwrap();

        let items = memory.retrieve("q", 3).await.unwrap();
        assert_eq!(
            items,
            vec!["a-info".to_string(), "b-info".to_string(), "c-info".to_string()]
        );
    }

    #[tokio::test]
    async fn test_retrieve_clamps_k_to_stored_count() {
        let memory = InteractionMemory::new(StubEmbedder::new(2));
        memory.add("only entry", "info".to_string()).await.unwrap();

        let items = memory.retrieve("only entry", 10).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_len_tracks_adds() {
        let memory = InteractionMemory::new(StubEmbedder::new(2));
        assert!(memory.is_empty());
        memory.add("one", 1u32).await.unwrap();
        memory.add("two", 2u32).await.unwrap();
        assert_eq!(memory.len(), 2);
    }
}
