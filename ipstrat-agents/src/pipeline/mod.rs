//! Sequential multi-role analysis: patent, trademark, then valuation.
//!
//! Each role sees the outputs of the roles before it. The pipeline fails as a
//! whole as soon as one role exhausts its iteration budget.

pub mod agent;
pub mod roles;


pub use agent::{RoleAgent, DEFAULT_MAX_ITERATIONS, PIPELINE_TEMPERATURE};
pub use roles::{RoleSpec, PIPELINE_ROLES};

use crate::request::AnalysisInput;
use crate::Agent;
use ipstrat_llm_sdk::client::LlmClient;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{role} failed: {cause:#}")]
    Agent {
        role: &'static str,
        cause: anyhow::Error,
    },
}

/// Output of one role, kept in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub role: &'static str,
    pub text: String,
}

pub struct AgentPipeline {
    agents: Vec<RoleAgent>,
}

impl AgentPipeline {
    pub fn new(client: Arc<dyn LlmClient>, max_iterations: u32) -> Self {
        let agents = PIPELINE_ROLES
            .iter()
            .map(|spec| RoleAgent::new(spec, client.clone(), max_iterations))
            .collect();
        Self { agents }
    }

    pub fn roles(&self) -> impl Iterator<Item = &'static RoleSpec> + '_ {
        self.agents.iter().map(|a| a.spec())
    }

    /// Run every role in order and aggregate their outputs under role headings.
    pub async fn run(&self, input: &AnalysisInput) -> Result<String, PipelineError> {
        let stages = self.run_stages(input).await?;
        Ok(aggregate(&stages))
    }

    pub async fn run_stages(&self, input: &AnalysisInput) -> Result<Vec<StageOutput>, PipelineError> {
        let mut stages: Vec<StageOutput> = Vec::with_capacity(self.agents.len());

        for agent in &self.agents {
            let spec = agent.spec();
            let prompt = task_prompt(spec, input, &stages);
            info!(
                role = spec.key,
                objective = agent.objective(),
                prompt_chars = prompt.len(),
                "Starting pipeline stage"
            );

            let text = agent.execute(&prompt).await.map_err(|cause| {
                error!(role = spec.key, error = %cause, "Pipeline stage failed");
                PipelineError::Agent {
                    role: spec.role,
                    cause,
                }
            })?;

            stages.push(StageOutput {
                role: spec.role,
                text,
            });
        }

        Ok(stages)
    }
}

/// Task description followed by the outputs of earlier stages
fn task_prompt(spec: &RoleSpec, input: &AnalysisInput, previous: &[StageOutput]) -> String {
    let mut prompt = (spec.task)(input);
    if !previous.is_empty() {
        prompt.push_str("\n\nContext from previous analyses:");
        for stage in previous {
            prompt.push_str(&format!("\n\n## {}\n{}", stage.role, stage.text.trim()));
        }
    }
    prompt
}

fn aggregate(stages: &[StageOutput]) -> String {
    stages
        .iter()
        .map(|s| format!("## {}\n\n{}", s.role, s.text.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
