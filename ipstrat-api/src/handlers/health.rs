use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use ipstrat_agents::outcome::quota_info;

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        pipeline_available: state.pipeline_available(),
        llm_available: state.llm_available(),
        model: state.model.clone(),
        quota_info: quota_info(),
    })
}
