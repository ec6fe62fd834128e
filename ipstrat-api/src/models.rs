use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub model_used: String,
}

/// Either `result` alone, or `result_raw` and `result_refined` when refinement is on
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_refined: Option<String>,
    pub model_used: String,
    pub method: String,
    pub note: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub pipeline_available: bool,
    pub llm_available: bool,
    pub model: String,
    pub quota_info: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RoleInfo {
    pub key: String,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub expected_output: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AgentsResponse {
    pub pipeline_available: bool,
    pub agents: Vec<RoleInfo>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            missing_fields: Vec::new(),
        }
    }
}
