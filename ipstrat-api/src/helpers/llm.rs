use crate::config::ApiConfig;
use ipstrat_agents::{AgentPipeline, DirectAnalyst, Refiner, Strategist};
use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::gemini::GeminiClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Keys issued by Google AI Studio share this prefix
const GOOGLE_KEY_PREFIX: &str = "AIza";

pub fn create_gemini_client(config: &ApiConfig, api_key: &str) -> anyhow::Result<GeminiClient> {
    let client = GeminiClient::new(api_key)?
        .with_base_url(config.llm.base_url.clone())
        .with_model(config.llm.model.clone())
        .with_timeout(Duration::from_secs(config.llm.timeout_secs))?;
    Ok(client)
}

/// Build the analysis front door, or `None` when no API key is configured.
///
/// The pipeline gets its own client at the configured temperature and is only
/// created for keys that look like Google keys.
pub fn create_strategist(config: &ApiConfig) -> anyhow::Result<Option<Strategist>> {
    let Some(api_key) = config.api_key() else {
        error!("GOOGLE_API_KEY not found; chat and analysis are disabled");
        return Ok(None);
    };

    let preview: String = api_key.chars().take(8).collect();
    info!(key_prefix = %preview, model = %config.llm.model, "API key found");

    let direct_client: Arc<dyn LlmClient> = Arc::new(create_gemini_client(config, api_key)?);

    let pipeline = if !config.analysis.use_agent_pipeline {
        info!("Agent pipeline disabled by configuration");
        None
    } else if !api_key.starts_with(GOOGLE_KEY_PREFIX) {
        warn!("API key does not look like a Google key; agent pipeline disabled");
        None
    } else {
        let pipeline_client =
            create_gemini_client(config, api_key)?.with_temperature(config.llm.temperature);
        info!(
            max_iterations = config.analysis.max_iterations,
            "Agent pipeline ready"
        );
        Some(AgentPipeline::new(
            Arc::new(pipeline_client),
            config.analysis.max_iterations,
        ))
    };

    let refiner = config
        .analysis
        .refine
        .then(|| Refiner::new(direct_client.clone()));

    Ok(Some(Strategist::new(
        pipeline,
        DirectAnalyst::new(direct_client),
        refiner,
    )))
}
