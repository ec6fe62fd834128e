pub mod direct;
pub mod outcome;
pub mod pipeline;
pub mod prompts;
pub mod rate_limiter;
pub mod refiner;
pub mod request;
pub mod strategist;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use direct::DirectAnalyst;
pub use outcome::{ProviderFailure, ProviderResult, QUOTA_MESSAGE};
pub use pipeline::{AgentPipeline, PipelineError};
pub use rate_limiter::RateLimiter;
pub use refiner::Refiner;
pub use request::{AnalysisInput, AnalysisRequest, ValidationError, REQUIRED_FIELDS};
pub use strategist::{AnalysisMethod, AnalysisReport, Strategist};

use async_trait::async_trait;

/// Trait defining the structure and behavior of an AI agent
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent's clear objective
    fn objective(&self) -> &str;

    /// Returns the system prompt for the agent
    fn system_prompt(&self) -> String;

    /// Execute the agent with the given user prompt
    async fn execute(&self, user_prompt: &str) -> anyhow::Result<String>;
}
