use crate::error::{ApiError, ApiResult};
use crate::models::AnalyzeResponse;
use crate::state::AppState;
use actix_web::{post, web, HttpResponse};
use ipstrat_agents::{AnalysisMethod, AnalysisRequest};
use tracing::info;

const ANALYZE_UNAVAILABLE: &str =
    "AI system not available. Please check your configuration and API quota at https://ai.dev/usage";

fn method_note(method: AnalysisMethod) -> &'static str {
    match method {
        AnalysisMethod::AgentPipeline => "Analysis performed by the multi-agent pipeline",
        AnalysisMethod::DirectApi => "Analysis performed using direct Gemini API",
    }
}

#[post("/analyze")]
pub async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalysisRequest>,
) -> ApiResult<HttpResponse> {
    let input = req.into_inner().validate()?;

    let strategist = state
        .strategist
        .as_ref()
        .ok_or(ApiError::Unavailable(ANALYZE_UNAVAILABLE))?;

    let waited = state.rate_limiter.acquire().await;
    info!(
        trademark = %input.trademark_name,
        pipeline = strategist.pipeline_available(),
        waited_ms = waited.as_millis() as u64,
        "Starting IP strategy analysis"
    );

    let report = strategist
        .analyze(&input)
        .await
        .map_err(ApiError::from_analysis_failure)?;

    let (result, result_raw, result_refined) = match report.refined {
        Some(refined) => (None, Some(report.raw), Some(refined)),
        None => (Some(report.raw), None, None),
    };

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        result,
        result_raw,
        result_refined,
        model_used: strategist.model_name().to_string(),
        method: report.method.as_str().to_string(),
        note: method_note(report.method).to_string(),
    }))
}
