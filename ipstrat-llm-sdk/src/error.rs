use thiserror::Error;

/// Error types for provider calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Authentication failed (HTTP 401/403) or the key is unusable
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Quota or rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// API error with status code (HTTP 4xx/5xx except above)
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network, connection or timeout error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Generic error for unexpected cases
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LlmError {
    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit<S: Into<String>>(message: S, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the provider rejected the call for quota reasons
    pub fn is_quota(&self) -> bool {
        match self {
            Self::RateLimit { .. } => true,
            Self::Api { status, message } => *status == 429 || mentions_quota(message),
            Self::Authentication { message } => mentions_quota(message),
            _ => false,
        }
    }

    /// Message the provider attached to the failure, without our prefix
    pub fn provider_message(&self) -> String {
        match self {
            Self::Authentication { message }
            | Self::RateLimit { message, .. }
            | Self::InvalidRequest { message }
            | Self::Api { message, .. }
            | Self::Internal { message } => message.clone(),
            Self::Network { source } => source.to_string(),
            Self::Parse { source } => source.to_string(),
        }
    }

    /// True for failures that happened before a provider status was received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Parse { .. } | Self::Internal { .. }
        )
    }
}

fn mentions_quota(message: &str) -> bool {
    message.contains("RESOURCE_EXHAUSTED") || message.to_lowercase().contains("quota")
}
