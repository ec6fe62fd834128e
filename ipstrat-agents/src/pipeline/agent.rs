use super::roles::RoleSpec;
use crate::Agent;
use async_trait::async_trait;
use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::types::CompletionRequest;
use std::sync::Arc;
use tracing::{info, warn};

/// Iteration budget per role unless configured otherwise
pub const DEFAULT_MAX_ITERATIONS: u32 = 2;

/// Temperature of the shared pipeline LLM handle
pub const PIPELINE_TEMPERATURE: f32 = 0.7;

/// A specialist bound to the shared LLM handle. It never delegates to other roles.
pub struct RoleAgent {
    spec: &'static RoleSpec,
    client: Arc<dyn LlmClient>,
    max_iterations: u32,
}

impl RoleAgent {
    pub fn new(spec: &'static RoleSpec, client: Arc<dyn LlmClient>, max_iterations: u32) -> Self {
        Self {
            spec,
            client,
            max_iterations: max_iterations.max(1),
        }
    }

    pub fn spec(&self) -> &'static RoleSpec {
        self.spec
    }
}

#[async_trait]
impl Agent for RoleAgent {
    fn objective(&self) -> &str {
        self.spec.goal
    }

    fn system_prompt(&self) -> String {
        format!(
            "You are a {role}. {backstory}.\n\nYour goal: {goal}.\n\
             Work alone; do not hand the task to anyone else.\n\
             Expected output: {expected}.",
            role = self.spec.role,
            backstory = self.spec.backstory,
            goal = self.spec.goal,
            expected = self.spec.expected_output,
        )
    }

    async fn execute(&self, user_prompt: &str) -> anyhow::Result<String> {
        let mut iteration = 0;
        let mut last_error = String::from("no attempt made");

        loop {
            iteration += 1;
            if iteration > self.max_iterations {
                anyhow::bail!(
                    "Maximum iteration limit reached for {} ({}): {}",
                    self.spec.role,
                    self.max_iterations,
                    last_error
                );
            }

            let request = CompletionRequest::prompt(self.client.model_name(), user_prompt)
                .with_system(self.system_prompt())
                .with_temperature(PIPELINE_TEMPERATURE);

            match self.client.complete(request).await {
                Ok(response) => {
                    let text = response.text();
                    if !text.trim().is_empty() {
                        info!(role = self.spec.key, iteration, chars = text.len(), "Role completed");
                        return Ok(text);
                    }
                    warn!(role = self.spec.key, iteration, "Role returned empty output");
                    last_error = "empty response".to_string();
                }
                // Retrying a quota rejection only burns more quota
                Err(e) if e.is_quota() => return Err(e.into()),
                Err(e) => {
                    warn!(role = self.spec.key, iteration, error = %e, "Role attempt failed");
                    last_error = e.to_string();
                }
            }
        }
    }
}
