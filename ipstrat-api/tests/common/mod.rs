#![allow(dead_code)]

use actix_web::{test, web, App};
use ipstrat_agents::{AgentPipeline, DirectAnalyst, RateLimiter, Refiner, Strategist};
use ipstrat_api::state::AppState;
use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::error::LlmError;
use ipstrat_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<String, LlmError>>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    pub fn with_responses(responses: Vec<Result<String, LlmError>>) -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn prompt_of(&self, call: usize) -> String {
        let requests = self.requests.lock().unwrap();
        match &requests[call].messages[0].content[0] {
            ContentBlock::Text { text } => text.clone(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let reply = if responses.is_empty() {
            Ok("Mock strategy report.".to_string())
        } else {
            responses.remove(0)
        };

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

pub fn quota_error() -> LlmError {
    LlmError::rate_limit("Resource has been exhausted (e.g. check quota).", None)
}

pub fn valid_analysis_body() -> serde_json::Value {
    serde_json::json!({
        "technology_description": "A battery chemistry that doubles cycle life",
        "trademark_name": "VoltNova",
        "market_description": "Consumer electronics and e-bikes",
        "estimated_revenue": "$5M in year 3",
        "budget": "$250k",
        "timeline": "18 months",
        "competitor_list": "CATL, Panasonic"
    })
}

/// Wire a strategist from mock clients; the limiter is disabled so tests stay fast
pub fn mock_state(
    direct: Arc<MockLlmClient>,
    pipeline: Option<Arc<MockLlmClient>>,
    refine: bool,
) -> AppState {
    let direct_client = direct as Arc<dyn LlmClient>;
    let pipeline = pipeline.map(|client| AgentPipeline::new(client as Arc<dyn LlmClient>, 1));
    let refiner = refine.then(|| Refiner::new(direct_client.clone()));
    let strategist = Strategist::new(pipeline, DirectAnalyst::new(direct_client), refiner);

    AppState::new(
        Some(strategist),
        RateLimiter::new(Duration::ZERO),
        "mock-model",
    )
}

pub fn unconfigured_state() -> AppState {
    AppState::new(None, RateLimiter::new(Duration::ZERO), "gemini-1.5-flash")
}

pub async fn setup_test_app(
    state: AppState,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(ipstrat_api::configure),
    )
    .await
}
