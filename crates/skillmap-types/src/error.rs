use thiserror::Error;

/// Errors from the vector index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("vector dimension mismatch: index expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors from the text-to-vector step.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model failure: {0}")]
    Model(String),

    #[error("embedder returned {actual} vectors for {expected} inputs")]
    BatchShape { expected: usize, actual: usize },
}

/// Errors that cross the recommend/retrieve boundary.
///
/// Empty corpora and out-of-range search positions never surface here;
/// they shorten the returned sequence instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Errors loading the course catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalogue JSON: {0}")]
    Parse(String),
}

/// Request validation errors at the HTTP/CLI boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one non-empty skill is required")]
    NoSkills,

    #[error("too many skills: {0} (maximum 20)")]
    TooManySkills(usize),

    #[error("goal must be between 3 and 200 characters")]
    GoalLength,
}

/// Errors from the roadmap generation pipeline.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("llm completion failed: {0}")]
    Llm(#[from] crate::llm::LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = IndexError::DimensionMismatch {
            expected: 384,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "vector dimension mismatch: index expects 384, got 3"
        );
    }

    #[test]
    fn test_search_error_is_transparent() {
        let err: SearchError = EmbeddingError::Model("out of memory".to_string()).into();
        assert_eq!(err.to_string(), "embedding model failure: out of memory");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::TooManySkills(25).to_string(),
            "too many skills: 25 (maximum 20)"
        );
    }
}
