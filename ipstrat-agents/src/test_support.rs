use crate::request::AnalysisInput;
use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::error::LlmError;
use ipstrat_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued replies in order and records every request it receives
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn prompt_of(&self, call: usize) -> String {
        let requests = self.requests.lock().unwrap();
        match &requests[call].messages[0].content[0] {
            ContentBlock::Text { text } => text.clone(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::internal("no scripted reply left")));

        reply.map(|text| CompletionResponse {
            content: vec![ContentBlock::Text { text }],
            role: Role::Assistant,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
            stop_reason: Some("STOP".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn sample_input() -> AnalysisInput {
    AnalysisInput {
        technology_description: "Solid-state battery electrolyte".to_string(),
        trademark_name: "VoltCore".to_string(),
        market_description: "EV manufacturers".to_string(),
        estimated_revenue: "$5M".to_string(),
        budget: "$50k".to_string(),
        timeline: "12 months".to_string(),
        competitor_list: "QuantumScape, Solid Power".to_string(),
    }
}
