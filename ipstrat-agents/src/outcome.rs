use ipstrat_llm_sdk::error::LlmError;
use ipstrat_llm_sdk::providers::GOOGLE_USAGE_URL;
use ipstrat_llm_sdk::types::CompletionResponse;
use thiserror::Error;

/// Shown to users when the provider rejects a call for quota reasons
pub const QUOTA_MESSAGE: &str =
    "API quota exceeded. Please wait a few minutes and try again. Check your usage at: https://ai.dev/usage";

/// Why a provider round-trip produced no report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderFailure {
    /// HTTP 429 or an exhausted-quota status from the provider
    #[error("{}", QUOTA_MESSAGE)]
    QuotaExceeded,

    /// Any other non-success status; carries the provider's own message
    #[error("API Error: {0}")]
    Provider(String),

    /// Connection, timeout or malformed-response failure
    #[error("Error: {0}")]
    Transport(String),
}

impl ProviderFailure {
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded)
    }
}

impl From<LlmError> for ProviderFailure {
    fn from(err: LlmError) -> Self {
        if err.is_quota() {
            Self::QuotaExceeded
        } else if err.is_transport() {
            Self::Transport(err.to_string())
        } else {
            Self::Provider(err.provider_message())
        }
    }
}

/// Report text on success, classified failure otherwise
pub type ProviderResult = Result<String, ProviderFailure>;

/// Collapse a completion into report text, treating an empty answer as a provider failure.
pub(crate) fn into_report(result: Result<CompletionResponse, LlmError>) -> ProviderResult {
    let response = result?;
    let text = response.text();
    if text.trim().is_empty() {
        return Err(ProviderFailure::Provider(
            "Provider returned an empty response".to_string(),
        ));
    }
    Ok(text)
}

/// Usage page link for quota guidance in health output
pub fn quota_info() -> String {
    format!("Check usage at: {}", GOOGLE_USAGE_URL)
}
