use crate::direct::DirectAnalyst;
use crate::outcome::ProviderFailure;
use crate::pipeline::AgentPipeline;
use crate::refiner::Refiner;
use crate::request::AnalysisInput;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Which path produced a report; the wire names predate this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    #[serde(rename = "crewai")]
    AgentPipeline,
    #[serde(rename = "direct_api")]
    DirectApi,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgentPipeline => "crewai",
            Self::DirectApi => "direct_api",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub method: AnalysisMethod,
    pub raw: String,
    /// Present only when a refiner is configured
    pub refined: Option<String>,
}

/// Chooses between the agent pipeline and the direct call, then optionally refines.
///
/// START -> pipeline -> ok: DONE(crewai)
///                   -> err: direct -> ok: DONE(direct_api) | err: FAILED
/// Without a pipeline the direct call is the only path.
pub struct Strategist {
    pipeline: Option<AgentPipeline>,
    direct: DirectAnalyst,
    refiner: Option<Refiner>,
}

impl Strategist {
    pub fn new(
        pipeline: Option<AgentPipeline>,
        direct: DirectAnalyst,
        refiner: Option<Refiner>,
    ) -> Self {
        Self {
            pipeline,
            direct,
            refiner,
        }
    }

    pub fn pipeline_available(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn pipeline(&self) -> Option<&AgentPipeline> {
        self.pipeline.as_ref()
    }

    pub fn direct(&self) -> &DirectAnalyst {
        &self.direct
    }

    pub fn model_name(&self) -> &str {
        self.direct.model_name()
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisReport, ProviderFailure> {
        let (method, raw) = self.produce_raw(input).await?;

        let refined = match &self.refiner {
            Some(refiner) => Some(refiner.refine(&raw).await),
            None => None,
        };

        info!(method = method.as_str(), chars = raw.len(), "Analysis complete");
        Ok(AnalysisReport {
            method,
            raw,
            refined,
        })
    }

    async fn produce_raw(
        &self,
        input: &AnalysisInput,
    ) -> Result<(AnalysisMethod, String), ProviderFailure> {
        if let Some(pipeline) = &self.pipeline {
            match pipeline.run(input).await {
                Ok(report) => return Ok((AnalysisMethod::AgentPipeline, report)),
                Err(e) => {
                    warn!(error = %e, "Agent pipeline failed, falling back to direct API");
                }
            }
        } else {
            info!("Agent pipeline unavailable, using direct API");
        }

        let report = self.direct.analyze(input).await?;
        Ok((AnalysisMethod::DirectApi, report))
    }
}
