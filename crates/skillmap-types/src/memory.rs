//! Interaction memory types.
//!
//! The memory holds one record per generated roadmap: the prompt that was
//! sent to the LLM and the text that came back. It lives in process memory
//! only and resets on restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One remembered mentor interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub id: Uuid,
    /// The full prompt, including any injected context.
    pub prompt: String,
    /// The generated roadmap text.
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl InteractionRecord {
    /// Create a record with a fresh id and timestamp.
    pub fn new(prompt: String, response: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            prompt,
            response,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = InteractionRecord::new("p1".to_string(), "r1".to_string());
        let b = InteractionRecord::new("p2".to_string(), "r2".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_serializes_prompt_and_response() {
        let record = InteractionRecord::new("the prompt".to_string(), "the roadmap".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"prompt\":\"the prompt\""));
        assert!(json.contains("\"response\":\"the roadmap\""));
    }
}
