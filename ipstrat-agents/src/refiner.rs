use crate::direct::DirectAnalyst;
use crate::prompts;
use ipstrat_llm_sdk::client::LlmClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Second round-trip that cleans a raw report.
///
/// Refinement never fails: any problem yields the raw text unchanged.
pub struct Refiner {
    direct: DirectAnalyst,
}

impl Refiner {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            direct: DirectAnalyst::new(client),
        }
    }

    pub async fn refine(&self, raw_report: &str) -> String {
        match self.direct.complete(prompts::refine_prompt(raw_report)).await {
            Ok(refined) => {
                info!(raw_chars = raw_report.len(), refined_chars = refined.len(), "Report refined");
                refined
            }
            Err(failure) => {
                warn!(error = %failure, "Refinement failed, keeping raw report");
                raw_report.to_string()
            }
        }
    }
}
