//! Course recommendation over the static catalogue.
//!
//! Owns one embedder and one embedded corpus built from the catalogue's
//! course descriptions. The catalogue is loaded once at startup and never
//! mutated, so lookups need no locking.

use tracing::debug;

use skillmap_types::course::Course;
use skillmap_types::error::{EmbeddingError, SearchError};

use crate::embedder::{Embedder, embed_one};
use crate::index::corpus::EmbeddedCorpus;

/// Default number of courses returned by [`CourseRecommender::recommend`].
pub const DEFAULT_COURSE_K: usize = 5;

/// Embedding-backed recommender over an immutable course catalogue.
pub struct CourseRecommender<E: Embedder> {
    embedder: E,
    corpus: EmbeddedCorpus<Course>,
}

impl<E: Embedder> CourseRecommender<E> {
    /// Embed every course description and build the search corpus.
    ///
    /// One batch embed call covers the whole catalogue. An empty
    /// catalogue builds an empty corpus without calling the embedder.
    pub async fn build(embedder: E, catalogue: Vec<Course>) -> Result<Self, SearchError> {
        let mut corpus = EmbeddedCorpus::new(embedder.dimension());

        if !catalogue.is_empty() {
            let descriptions: Vec<String> =
                catalogue.iter().map(|course| course.desc.clone()).collect();
            let vectors = embedder.embed(&descriptions).await?;
            if vectors.len() != catalogue.len() {
                return Err(EmbeddingError::BatchShape {
                    expected: catalogue.len(),
                    actual: vectors.len(),
                }
                .into());
            }
            for (vector, course) in vectors.iter().zip(catalogue) {
                corpus.insert(vector, course)?;
            }
        }

        debug!(
            courses = corpus.len(),
            model = embedder.model_name(),
            "course recommender ready"
        );
        Ok(Self { embedder, corpus })
    }

    /// The loaded catalogue in its original order.
    pub fn catalogue(&self) -> &[Course] {
        self.corpus.payloads()
    }

    /// The `k` courses whose descriptions are closest to `gap_text`,
    /// most relevant first.
    ///
    /// An empty catalogue returns an empty list without touching the
    /// embedder. `k` is clamped to the catalogue size before the search,
    /// so asking for more courses than exist is not an error.
    pub async fn recommend(&self, gap_text: &str, k: usize) -> Result<Vec<Course>, SearchError> {
        let n = self.corpus.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        let k = k.min(n);
        if k == 0 {
            return Ok(Vec::new());
        }

        let query = embed_one(&self.embedder, gap_text).await?;
        Ok(self
            .corpus
            .nearest(&query, k)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubEmbedder;

    fn course(title: &str, desc: &str) -> Course {
        Course {
            title: title.to_string(),
            desc: desc.to_string(),
            url: None,
            provider: None,
        }
    }

    /// The three-course catalogue from the recommend contract, with preset
    /// embeddings that rank SQL closest to a database query.
    fn sample_setup() -> (StubEmbedder, Vec<Course>) {
        let embedder = StubEmbedder::new(2)
            .with_preset("Relational databases and SQL querying", vec![1.0, 0.0])
            .with_preset("Advanced Python programming", vec![5.0, 0.0])
            .with_preset("Building UIs with React", vec![9.0, 0.0])
            .with_preset("need to learn databases", vec![0.0, 0.0]);
        let catalogue = vec![
            course("Intro to SQL", "Relational databases and SQL querying"),
            course("Advanced Python", "Advanced Python programming"),
            course("React Basics", "Building UIs with React"),
        ];
        (embedder, catalogue)
    }

    #[tokio::test]
    async fn test_recommend_clamps_k_to_catalogue_size() {
        let (embedder, catalogue) = sample_setup();
        let recommender = CourseRecommender::build(embedder, catalogue).await.unwrap();

        // k=5 against 3 courses: all 3 come back, no error
        let recs = recommender
            .recommend("need to learn databases", 5)
            .await
            .unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "Intro to SQL");
        assert_eq!(recs[1].title, "Advanced Python");
        assert_eq!(recs[2].title, "React Basics");
    }

    #[tokio::test]
    async fn test_recommend_on_empty_catalogue_skips_embedder() {
        let embedder = StubEmbedder::new(2);
        let recommender = CourseRecommender::build(embedder, Vec::new()).await.unwrap();

        let recs = recommender.recommend("anything", 5).await.unwrap();
        assert!(recs.is_empty());
        assert_eq!(recommender.embedder.calls(), 0);
    }

    #[tokio::test]
    async fn test_build_on_empty_catalogue_skips_embedder() {
        let embedder = StubEmbedder::new(2);
        let recommender = CourseRecommender::build(embedder, Vec::new()).await.unwrap();
        assert_eq!(recommender.embedder.calls(), 0);
        assert!(recommender.catalogue().is_empty());
    }

    #[tokio::test]
    async fn test_recommend_is_idempotent() {
        let (embedder, catalogue) = sample_setup();
        let recommender = CourseRecommender::build(embedder, catalogue).await.unwrap();

        let first = recommender
            .recommend("need to learn databases", 2)
            .await
            .unwrap();
        let second = recommender
            .recommend("need to learn databases", 2)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_recommend_length_bounded_by_k() {
        let (embedder, catalogue) = sample_setup();
        let recommender = CourseRecommender::build(embedder, catalogue).await.unwrap();

        let recs = recommender
            .recommend("need to learn databases", 2)
            .await
            .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Intro to SQL");
    }

    #[tokio::test]
    async fn test_recommend_k_zero_returns_empty() {
        let (embedder, catalogue) = sample_setup();
        let recommender = CourseRecommender::build(embedder, catalogue).await.unwrap();

        let recs = recommender.recommend("anything", 0).await.unwrap();
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn test_catalogue_preserves_load_order() {
        let (embedder, catalogue) = sample_setup();
        let recommender = CourseRecommender::build(embedder, catalogue).await.unwrap();

        let titles: Vec<&str> = recommender
            .catalogue()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Intro to SQL", "Advanced Python", "React Basics"]);
    }
}
