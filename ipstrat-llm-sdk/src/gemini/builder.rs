use super::client::GeminiClient;
use super::types::*;
use crate::error::LlmError;

/// Fluent single-request builder used for ad-hoc calls against a chosen model
pub struct MessageBuilder<'a> {
    client: &'a GeminiClient,
    model: Option<String>,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self {
            client,
            model: None,
            contents: Vec::new(),
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn user_message(mut self, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent {
            role: Some(GeminiRole::User),
            parts: vec![GeminiPart::text(text)],
        });
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.generation_config.max_output_tokens = Some(tokens);
        self
    }

    pub async fn send(self) -> Result<GeminiGenerateContentResponse, LlmError> {
        let model = self
            .model
            .ok_or_else(|| LlmError::invalid_request("Model is required"))?;

        if self.contents.is_empty() {
            return Err(LlmError::invalid_request(
                "At least one message is required",
            ));
        }

        let request = GeminiGenerateContentRequest {
            contents: self.contents,
            system_instruction: None,
            generation_config: None,
        }
        .with_generation_config(self.generation_config);

        self.client.generate_content(&model, request).await
    }
}
