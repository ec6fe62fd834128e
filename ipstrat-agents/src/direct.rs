use crate::outcome::{into_report, ProviderResult};
use crate::prompts;
use crate::request::AnalysisInput;
use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::types::CompletionRequest;
use std::sync::Arc;
use tracing::{error, info};

/// One-call path to the provider for chat answers and full reports
pub struct DirectAnalyst {
    client: Arc<dyn LlmClient>,
}

impl DirectAnalyst {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Send one prompt and classify the result; never panics or propagates.
    pub async fn complete(&self, prompt: String) -> ProviderResult {
        info!(prompt_chars = prompt.len(), model = %self.client.model_name(), "Calling provider");

        let request = CompletionRequest::prompt(self.client.model_name(), prompt);
        let result = into_report(self.client.complete(request).await);

        if let Err(failure) = &result {
            error!(error = %failure, "Provider call failed");
        }
        result
    }

    pub async fn chat(&self, user_message: &str) -> ProviderResult {
        self.complete(prompts::chat_prompt(user_message)).await
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> ProviderResult {
        self.complete(prompts::direct_analysis_prompt(input)).await
    }
}
