//! Global configuration types for SkillMap.
//!
//! Deserialized from `config.toml` in the data directory. Every field has
//! a default so a missing or partial file still yields a working config.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Overrides `{data_dir}/courses.json` as the catalogue source.
    pub catalogue_path: Option<PathBuf>,
    pub llm: LlmConfig,
    pub retrieval: RetrievalConfig,
}

/// LLM provider settings for roadmap generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider id: "openai", "gemini" or "mistral".
    pub provider: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 700,
        }
    }
}

/// How many items the similarity searches return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Courses recommended per roadmap.
    pub course_k: usize,
    /// Past interactions injected as prompt context.
    pub context_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            course_k: 5,
            context_k: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert!(config.catalogue_path.is_none());
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.max_tokens, 700);
        assert_eq!(config.retrieval.course_k, 5);
        assert_eq!(config.retrieval.context_k, 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GlobalConfig = toml::from_str(
            r#"
[llm]
provider = "mistral"
model = "mistral-large-latest"
"#,
        )
        .unwrap();
        assert_eq!(config.llm.provider, "mistral");
        assert_eq!(config.llm.model, "mistral-large-latest");
        // Unspecified fields keep their defaults
        assert!((config.llm.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.retrieval.course_k, 5);
    }

    #[test]
    fn test_catalogue_path_override_parses() {
        let config: GlobalConfig =
            toml::from_str(r#"catalogue_path = "/srv/skillmap/courses.json""#).unwrap();
        assert_eq!(
            config.catalogue_path,
            Some(PathBuf::from("/srv/skillmap/courses.json"))
        );
    }
}
