//! Deterministic stubs for exercising the search core without a model or
//! a network.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use skillmap_types::error::EmbeddingError;
use skillmap_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use crate::embedder::Embedder;
use crate::llm::provider::LlmProvider;

/// Embedder stub returning preset vectors by exact text, falling back to
/// a byte-sum vector so unknown texts still embed deterministically.
pub struct StubEmbedder {
    dimension: usize,
    preset: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            preset: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_preset(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dimension);
        self.preset.insert(text.to_string(), vector);
        self
    }

    /// Number of embed() invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fallback(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for (i, byte) in text.bytes().enumerate() {
            vector[i % self.dimension] += byte as f32;
        }
        vector
    }
}

impl Embedder for StubEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts
            .iter()
            .map(|text| {
                self.preset
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| self.fallback(text))
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        "stub-embedder"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// LLM stub replying with a numbered canned roadmap and recording every
/// prompt it was sent.
pub struct StubLlm {
    prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt content received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LlmProvider for StubLlm {
    fn name(&self) -> &str {
        "stub-llm"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let content = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(content);
        let n = prompts.len();
        Ok(CompletionResponse {
            id: format!("stub-{n}"),
            content: format!("roadmap #{n}"),
            model: request.model.clone(),
            usage: Usage::default(),
        })
    }
}
