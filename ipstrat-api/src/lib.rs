pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

use actix_web::web;
use error::ApiError;

/// Register every route plus the JSON body error mapping.
///
/// Shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into());

    cfg.app_data(json_config)
        .service(handlers::index::index)
        .service(handlers::health::health)
        .service(handlers::agents::list_agents)
        .service(handlers::chat::chat)
        .service(handlers::analyze::analyze);
}
