//! Roadmap generation service.
//!
//! Composes the three collaborators: interaction memory for context
//! retrieval, the LLM provider for the roadmap text, and the course
//! recommender for the gap courses. One generation appends exactly one
//! interaction to memory.

use std::sync::Arc;

use tracing::info;

use skillmap_types::config::{LlmConfig, RetrievalConfig};
use skillmap_types::error::RoadmapError;
use skillmap_types::llm::{CompletionRequest, Message, MessageRole};
use skillmap_types::memory::InteractionRecord;
use skillmap_types::roadmap::Roadmap;

use crate::embedder::Embedder;
use crate::llm::provider::LlmProvider;
use crate::memory::InteractionMemory;
use crate::recommend::CourseRecommender;
use crate::roadmap::prompt;

/// Service orchestrating roadmap generation.
///
/// Generic over the provider and embedder traits so the application layer
/// can pin concrete infra implementations while tests use stubs.
pub struct RoadmapService<L: LlmProvider, E: Embedder> {
    llm: L,
    recommender: Arc<CourseRecommender<E>>,
    memory: Arc<InteractionMemory<E, InteractionRecord>>,
    llm_config: LlmConfig,
    retrieval: RetrievalConfig,
}

impl<L: LlmProvider, E: Embedder> RoadmapService<L, E> {
    pub fn new(
        llm: L,
        recommender: Arc<CourseRecommender<E>>,
        memory: Arc<InteractionMemory<E, InteractionRecord>>,
        llm_config: LlmConfig,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            llm,
            recommender,
            memory,
            llm_config,
            retrieval,
        }
    }

    /// Generate a roadmap for the given skills and goal.
    ///
    /// Pipeline: retrieve past context, complete the mentor prompt,
    /// remember the new interaction, recommend courses for the gap.
    pub async fn generate(&self, skills: &[String], goal: &str) -> Result<Roadmap, RoadmapError> {
        let base_prompt = prompt::mentor_prompt(skills, goal);

        let context_items = self
            .memory
            .retrieve(&prompt::memory_key(skills, goal), self.retrieval.context_k)
            .await?;
        let context = context_items
            .iter()
            .map(|record| record.response.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let full_prompt = prompt::with_context(&context, &base_prompt);

        let request = CompletionRequest {
            model: self.llm_config.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: full_prompt.clone(),
            }],
            system: None,
            max_tokens: self.llm_config.max_tokens,
            temperature: Some(self.llm_config.temperature),
        };
        let response = self.llm.complete(&request).await?;
        let roadmap_text = response.content;

        self.memory
            .add(
                &full_prompt,
                InteractionRecord::new(full_prompt.clone(), roadmap_text.clone()),
            )
            .await?;

        let recommended = self
            .recommender
            .recommend(&prompt::gap_text(skills), self.retrieval.course_k)
            .await?;

        info!(
            provider = self.llm.name(),
            context_items = context_items.len(),
            courses = recommended.len(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "roadmap generated"
        );

        Ok(Roadmap {
            roadmap: roadmap_text,
            recommended_courses: recommended,
        })
    }
}
