//! LlmProvider trait definition.
//!
//! The external text-generation collaborator port. Roadmap generation
//! hands prompts over as plain strings and takes completions back as
//! plain strings; everything smarter belongs to the implementation.

use skillmap_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (OpenAI-compatible APIs and test stubs).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in skillmap-infra.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "mistral").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
