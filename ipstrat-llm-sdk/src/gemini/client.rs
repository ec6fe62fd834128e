use super::types::*;
use crate::error::LlmError;
use crate::models::gemini::GEMINI_1_5_FLASH;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of [`GeminiClient::probe_models`], in probe order
#[derive(Debug, Default)]
pub struct ModelProbe {
    pub working: Vec<String>,
    pub failures: Vec<(String, LlmError)>,
}

/// Google Gemini API client
///
/// The API key travels as the `key` query parameter, which is what Google AI
/// Studio keys (`AIza...`) expect.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: GEMINI_1_5_FLASH.to_string(),
            temperature: None,
            http_client: Self::build_http_client(DEFAULT_TIMEOUT)?,
        })
    }

    fn build_http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Network { source: e })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Model used by the `LlmClient` implementation
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Default temperature applied when a request does not set one
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.http_client = Self::build_http_client(timeout)?;
        Ok(self)
    }

    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        request: GeminiGenerateContentRequest,
    ) -> Result<GeminiGenerateContentResponse, LlmError> {
        let model = model.into();
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(model = %model, "Sending generateContent request");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            warn!(status = status.as_u16(), model = %model, "Gemini API returned an error");

            let message = serde_json::from_str::<GeminiErrorResponse>(&error_body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::map_error(status.as_u16(), message));
        }

        let generate_response = response
            .json::<GeminiGenerateContentResponse>()
            .await
            .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;

        Ok(generate_response)
    }

    /// List the models this key can see
    pub async fn list_models(&self) -> Result<Vec<GeminiModelInfo>, LlmError> {
        let url = format!("{}/v1beta/models", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(Self::map_error(status.as_u16(), error_body));
        }

        let listing = response
            .json::<GeminiListModelsResponse>()
            .await
            .map_err(|e| LlmError::internal(format!("Failed to parse model list: {}", e)))?;

        Ok(listing.models)
    }

    /// Send a short prompt to each candidate in order.
    ///
    /// With `stop_at_first` the sweep ends at the first model that answers.
    pub async fn probe_models(&self, candidates: &[&str], stop_at_first: bool) -> ModelProbe {
        let mut probe = ModelProbe::default();

        for model in candidates {
            let result = self
                .message_builder()
                .model(*model)
                .user_message("Say hello")
                .max_output_tokens(16)
                .send()
                .await;

            match result {
                Ok(_) => {
                    probe.working.push(model.to_string());
                    if stop_at_first {
                        break;
                    }
                }
                Err(e) => probe.failures.push((model.to_string(), e)),
            }
        }

        probe
    }

    fn map_error(status: u16, message: String) -> LlmError {
        match status {
            400 => LlmError::invalid_request(message),
            401 | 403 => LlmError::Authentication { message },
            429 => LlmError::rate_limit(message, None),
            _ => LlmError::api_error(status, message),
        }
    }

    pub fn message_builder(&self) -> super::builder::MessageBuilder<'_> {
        super::builder::MessageBuilder::new(self)
    }
}

#[async_trait]
impl crate::client::LlmClient for GeminiClient {
    async fn complete(
        &self,
        request: crate::types::CompletionRequest,
    ) -> Result<crate::types::CompletionResponse, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::invalid_request(
                "At least one message is required",
            ));
        }

        // A lone user turn is sent without a role, as the plain REST examples do
        let single_turn = request.messages.len() == 1
            && request.messages[0].role == crate::types::Role::User;

        let contents = request
            .messages
            .into_iter()
            .map(|msg| {
                let role = match msg.role {
                    crate::types::Role::User => GeminiRole::User,
                    crate::types::Role::Assistant => GeminiRole::Model,
                };
                let parts = msg
                    .content
                    .into_iter()
                    .map(|block| match block {
                        crate::types::ContentBlock::Text { text } => GeminiPart::text(text),
                    })
                    .collect();
                GeminiContent {
                    role: if single_turn { None } else { Some(role) },
                    parts,
                }
            })
            .collect();

        let generation_config = GenerationConfig {
            temperature: request.temperature.or(self.temperature),
            max_output_tokens: request.max_tokens,
        };

        let gemini_request = GeminiGenerateContentRequest {
            contents,
            system_instruction: request.system.map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(text)],
            }),
            generation_config: None,
        }
        .with_generation_config(generation_config);

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model
        };

        let response = self.generate_content(model, gemini_request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| LlmError::internal("Response contained no candidate text"))?
            .to_string();

        let usage = response
            .usage_metadata
            .as_ref()
            .map(|u| crate::types::Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(crate::types::CompletionResponse {
            content: vec![crate::types::ContentBlock::Text { text }],
            role: crate::types::Role::Assistant,
            usage,
            stop_reason: response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::GOOGLE
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
