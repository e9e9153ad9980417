//! Brute-force L2 nearest-neighbor index.
//!
//! Stores vectors in insertion order in one contiguous buffer and answers
//! queries by scanning every stored vector. Catalogue and memory corpora
//! are small (tens to low thousands of entries), so an exact flat scan is
//! enough and keeps rankings deterministic and reproducible.

use skillmap_types::error::IndexError;

/// Append-only flat vector index over a fixed dimension.
///
/// Position `i` is permanently associated with the `i`-th added vector;
/// there is no deletion or update.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    data: Vec<f32>,
}

impl FlatIndex {
    /// Create an empty index for vectors of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "index dimension must be nonzero");
        Self {
            dimension,
            data: Vec::new(),
        }
    }

    /// The fixed vector dimension of this index.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a vector, assigning it the next position.
    ///
    /// Wrong-dimension vectors are rejected before the store is touched,
    /// so a failed add never corrupts the index.
    pub fn add(&mut self, vector: &[f32]) -> Result<usize, IndexError> {
        if vector.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        let position = self.len();
        self.data.extend_from_slice(vector);
        Ok(position)
    }

    /// The `k` stored vectors closest to `query` by Euclidean distance,
    /// ascending. Exact ties come back in insertion order.
    ///
    /// `query` must come from the same embedder as the stored vectors.
    /// Returns fewer than `k` pairs when fewer vectors are stored.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        debug_assert_eq!(query.len(), self.dimension);

        let mut hits: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dimension)
            .map(|stored| l2_distance(stored, query))
            .enumerate()
            .collect();

        hits.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits.truncate(k);
        hits
    }
}

/// Euclidean distance between two equal-length vectors.
fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}
