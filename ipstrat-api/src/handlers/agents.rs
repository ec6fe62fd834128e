use crate::models::{AgentsResponse, RoleInfo};
use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use ipstrat_agents::pipeline::PIPELINE_ROLES;

/// Pipeline roles in execution order, listed whether or not the pipeline is live
#[get("/agents")]
pub async fn list_agents(state: web::Data<AppState>) -> impl Responder {
    let agents = PIPELINE_ROLES
        .iter()
        .map(|spec| RoleInfo {
            key: spec.key.to_string(),
            role: spec.role.to_string(),
            goal: spec.goal.to_string(),
            backstory: spec.backstory.to_string(),
            expected_output: spec.expected_output.to_string(),
        })
        .collect();

    HttpResponse::Ok().json(AgentsResponse {
        pipeline_available: state.pipeline_available(),
        agents,
    })
}
