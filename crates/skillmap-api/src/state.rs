//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and
//! REST API. Services are generic over the Embedder/LlmProvider traits,
//! but AppState pins them to the concrete infra implementations.

use std::sync::Arc;

use tracing::warn;

use skillmap_core::memory::InteractionMemory;
use skillmap_core::recommend::CourseRecommender;
use skillmap_core::roadmap::service::RoadmapService;
use skillmap_infra::catalogue::load_catalogue;
use skillmap_infra::config::load_global_config;
use skillmap_infra::data_dir::resolve_data_dir;
use skillmap_infra::embedding::FastEmbedder;
use skillmap_infra::llm::openai_compat::config::api_key_env;
use skillmap_infra::llm::openai_compat::OpenAiCompatibleProvider;
use skillmap_types::config::GlobalConfig;
use skillmap_types::memory::InteractionRecord;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteRecommender = CourseRecommender<FastEmbedder>;

pub type ConcreteMemory = InteractionMemory<FastEmbedder, InteractionRecord>;

pub type ConcreteRoadmapService = RoadmapService<OpenAiCompatibleProvider, FastEmbedder>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<ConcreteRecommender>,
    pub memory: Arc<ConcreteMemory>,
    /// Present only when an API key for the configured provider exists.
    pub roadmap_service: Option<Arc<ConcreteRoadmapService>>,
    pub config: GlobalConfig,
}

impl AppState {
    /// Initialize the application state: load config and catalogue, build
    /// the embedding corpora, wire the roadmap service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let catalogue_path = config
            .catalogue_path
            .clone()
            .unwrap_or_else(|| data_dir.join("courses.json"));
        let catalogue = load_catalogue(&catalogue_path).await?;

        // One embedder instance per index: the recommender and the memory
        // each own their own model handle.
        let model_cache = data_dir.join("models");
        let recommender = Arc::new(
            CourseRecommender::build(FastEmbedder::with_cache_dir(&model_cache)?, catalogue)
                .await?,
        );
        let memory = Arc::new(InteractionMemory::new(FastEmbedder::with_cache_dir(
            &model_cache,
        )?));

        let env_var = api_key_env(&config.llm.provider);
        let roadmap_service = match std::env::var(env_var) {
            Ok(api_key) if !api_key.trim().is_empty() => {
                let provider = OpenAiCompatibleProvider::from_provider_id(
                    &config.llm.provider,
                    &api_key,
                    &config.llm.model,
                );
                Some(Arc::new(RoadmapService::new(
                    provider,
                    Arc::clone(&recommender),
                    Arc::clone(&memory),
                    config.llm.clone(),
                    config.retrieval.clone(),
                )))
            }
            _ => {
                warn!("{env_var} not set, roadmap generation disabled");
                None
            }
        };

        Ok(Self {
            recommender,
            memory,
            roadmap_service,
            config,
        })
    }
}
