//! Vector-plus-payload corpus.
//!
//! Owns a flat index and the payload for each position behind one mutation
//! API, so the two sequences can never drift out of sync. Search results
//! are still bounds-filtered before projection as a runtime backstop.

use skillmap_types::error::IndexError;

use super::flat::FlatIndex;

/// An embedded corpus: each inserted vector carries a payload at the same
/// position.
#[derive(Debug, Clone)]
pub struct EmbeddedCorpus<T> {
    index: FlatIndex,
    payloads: Vec<T>,
}

impl<T> EmbeddedCorpus<T> {
    /// Create an empty corpus for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            index: FlatIndex::new(dimension),
            payloads: Vec::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// The fixed vector dimension of this corpus.
    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    /// All payloads in insertion order.
    pub fn payloads(&self) -> &[T] {
        &self.payloads
    }

    /// Append a vector and its payload at the same new position.
    ///
    /// A rejected vector leaves both sequences untouched.
    pub fn insert(&mut self, vector: &[f32], payload: T) -> Result<usize, IndexError> {
        let position = self.index.add(vector)?;
        self.payloads.push(payload);
        debug_assert_eq!(self.payloads.len(), self.index.len());
        Ok(position)
    }

    /// The payloads of the `k` nearest stored vectors, ascending by
    /// distance. Positions outside the payload range are dropped rather
    /// than surfaced as an error.
    pub fn nearest(&self, query: &[f32], k: usize) -> Vec<&T> {
        let n = self.payloads.len();
        self.index
            .search(query, k)
            .into_iter()
            .filter(|(position, _)| *position < n)
            .map(|(position, _)| &self.payloads[position])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_sequences_parallel() {
        let mut corpus = EmbeddedCorpus::new(2);
        corpus.insert(&[0.0, 0.0], "a").unwrap();
        corpus.insert(&[1.0, 0.0], "b").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.payloads(), &["a", "b"]);
    }

    #[test]
    fn test_rejected_insert_leaves_both_sequences_untouched() {
        let mut corpus = EmbeddedCorpus::new(2);
        corpus.insert(&[0.0, 0.0], "a").unwrap();

        let err = corpus.insert(&[1.0], "b").unwrap_err();
        assert!(matches!(err, IndexError::DimensionMismatch { .. }));
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.payloads(), &["a"]);
    }

    #[test]
    fn test_nearest_projects_in_distance_order() {
        let mut corpus = EmbeddedCorpus::new(2);
        corpus.insert(&[9.0, 0.0], "far").unwrap();
        corpus.insert(&[1.0, 0.0], "near").unwrap();
        corpus.insert(&[4.0, 0.0], "middle").unwrap();

        let hits = corpus.nearest(&[0.0, 0.0], 3);
        assert_eq!(hits, vec![&"near", &"middle", &"far"]);
    }

    #[test]
    fn test_nearest_on_empty_corpus_is_empty() {
        let corpus: EmbeddedCorpus<&str> = EmbeddedCorpus::new(2);
        assert!(corpus.nearest(&[0.0, 0.0], 3).is_empty());
    }

    #[test]
    fn test_nearest_caps_at_stored_count() {
        let mut corpus = EmbeddedCorpus::new(2);
        corpus.insert(&[1.0, 0.0], "only").unwrap();
        assert_eq!(corpus.nearest(&[0.0, 0.0], 10), vec![&"only"]);
    }
}
